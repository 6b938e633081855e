//! Regime-dependent Markov chain over joint sister states.
//!
//! At each step the two sisters independently hold or flip their
//! polymerization direction. A single hold probability applies per
//! coherence regime: `p_coherent` while the sisters move in opposite
//! directions, `p_incoherent` while they agree.

use rand::Rng;

use super::error::ModelError;
use super::state::{JointState, Regime};

/// Per-regime hold probabilities for the sister pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionProbabilities {
    coherent: f64,
    incoherent: f64,
}

impl TransitionProbabilities {
    /// Validate and build a probability pair; each must lie in [0, 1].
    ///
    /// The endpoints are meaningful: 1 freezes the regime (a uniform draw
    /// never exceeds 1), 0 flips both sisters almost surely.
    pub fn new(coherent: f64, incoherent: f64) -> Result<Self, ModelError> {
        for (name, value) in [("p_coherent", coherent), ("p_incoherent", incoherent)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ModelError::InvalidParameter { name, value });
            }
        }
        Ok(Self {
            coherent,
            incoherent,
        })
    }

    /// Hold threshold for the given regime.
    pub fn threshold(&self, regime: Regime) -> f64 {
        match regime {
            Regime::Coherent => self.coherent,
            Regime::Incoherent => self.incoherent,
        }
    }
}

/// Number of steps on the half-open grid 0, dt, 2·dt, … < t_max.
fn step_count(t_max: f64, dt: f64) -> Result<usize, ModelError> {
    if !(t_max.is_finite() && t_max > 0.0) {
        return Err(ModelError::InvalidParameter {
            name: "t_max",
            value: t_max,
        });
    }
    if !(dt.is_finite() && dt > 0.0) {
        return Err(ModelError::InvalidParameter { name: "dt", value: dt });
    }
    Ok((t_max / dt).ceil() as usize)
}

/// Advance the pair by one step.
///
/// Two independent uniform(0,1) draws are compared against the hold
/// threshold of the current regime, one per sister, in sister order. A draw
/// at or below the threshold holds that sister's direction; a draw above it
/// flips it. The mapping is the same in both regimes, only the threshold
/// differs.
fn step<R: Rng>(probs: &TransitionProbabilities, state: JointState, rng: &mut R) -> JointState {
    let threshold = probs.threshold(state.regime());
    let hold1 = rng.gen::<f64>() <= threshold;
    let hold2 = rng.gen::<f64>() <= threshold;
    JointState::new(
        if hold1 { state.sister1 } else { state.sister1.flipped() },
        if hold2 { state.sister2 } else { state.sister2.flipped() },
    )
}

/// Simulate the joint state over the half-open grid 0, dt, 2·dt, … < t_max.
///
/// The first element is `initial`; each later element is drawn from its
/// predecessor by [`step`]. The trajectory length is fixed up front and the
/// returned sequence is never mutated afterwards.
///
/// # Arguments
/// * `probs` - Hold probabilities per regime
/// * `initial` - Joint state at time zero
/// * `t_max` - Total simulated time, positive and finite
/// * `dt` - Time step, positive and finite
/// * `rng` - Random stream for this run
///
/// # Returns
/// * Trajectory of length ⌈t_max/dt⌉
pub fn simulate_states<R: Rng>(
    probs: &TransitionProbabilities,
    initial: JointState,
    t_max: f64,
    dt: f64,
    rng: &mut R,
) -> Result<Vec<JointState>, ModelError> {
    let steps = step_count(t_max, dt)?;
    let mut trajectory = Vec::with_capacity(steps);
    let mut current = initial;
    trajectory.push(current);
    for _ in 1..steps {
        current = step(probs, current, rng);
        trajectory.push(current);
    }
    Ok(trajectory)
}
