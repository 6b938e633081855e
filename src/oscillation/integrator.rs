//! Euler–Maruyama integrator for sister positions.
//!
//! Advances the two positions along a discrete state trajectory: each step
//! adds the deterministic restoring force, a joint-state-dependent poleward
//! bias, and independent Gaussian noise, all scaled by the time step. The
//! discrete trajectory drives the drift; positions never feed back into it.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::error::ModelError;
use super::force::ForceParameters;
use super::state::{JointState, SisterState};

/// Drift speeds, noise scale, and step size for a position run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntegrationParameters {
    /// Poleward bias speed pair (v₁, v₂).
    pub speeds: [f64; 2],
    /// Standard deviation of the per-sister Gaussian noise.
    pub noise_std: f64,
    /// Time step.
    pub dt: f64,
}

impl IntegrationParameters {
    /// Validate and build integration parameters.
    ///
    /// Speeds must be finite, `noise_std` non-negative, `dt` positive.
    /// A zero `noise_std` is valid and makes the integrator deterministic.
    pub fn new(speeds: [f64; 2], noise_std: f64, dt: f64) -> Result<Self, ModelError> {
        for (name, value) in [("v1", speeds[0]), ("v2", speeds[1])] {
            if !value.is_finite() {
                return Err(ModelError::InvalidParameter { name, value });
            }
        }
        if !(noise_std.is_finite() && noise_std >= 0.0) {
            return Err(ModelError::InvalidParameter {
                name: "noise_std",
                value: noise_std,
            });
        }
        if !(dt.is_finite() && dt > 0.0) {
            return Err(ModelError::InvalidParameter { name: "dt", value: dt });
        }
        Ok(Self {
            speeds,
            noise_std,
            dt,
        })
    }
}

/// One row of the physical track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackPoint {
    /// Positions of the two sisters.
    pub positions: [f64; 2],
    /// Inter-sister distance, positions[0] − positions[1].
    pub separation: f64,
    /// Annotation of the joint state that drove this step.
    pub label: u8,
    /// Mean sister position.
    pub center: f64,
}

impl TrackPoint {
    /// Canonical initial record: sisters 1.0 apart around the origin,
    /// annotated incoherent. The derived fields of this row are pinned,
    /// not computed from the positions.
    pub fn initial() -> Self {
        Self {
            positions: [0.5, -0.5],
            separation: 0.0,
            label: 1,
            center: 0.0,
        }
    }

    /// Flatten to the [x₁, x₂, separation, label, center] row layout.
    pub fn as_row(&self) -> [f64; 5] {
        [
            self.positions[0],
            self.positions[1],
            self.separation,
            f64::from(self.label),
            self.center,
        ]
    }
}

/// Poleward bias pair for the active joint state.
///
/// Which of the two speeds pulls each sister depends on the joint state:
/// (-1,+1) → [-v₁, +v₂], (-1,-1) → [-v₁, +v₁], (+1,-1) → [-v₂, +v₁],
/// (+1,+1) → [-v₂, +v₂].
fn drift(state: JointState, speeds: [f64; 2]) -> [f64; 2] {
    let [v1, v2] = speeds;
    match (state.sister1, state.sister2) {
        (SisterState::Shrinking, SisterState::Growing) => [-v1, v2],
        (SisterState::Shrinking, SisterState::Shrinking) => [-v1, v1],
        (SisterState::Growing, SisterState::Shrinking) => [-v2, v1],
        (SisterState::Growing, SisterState::Growing) => [-v2, v2],
    }
}

/// Integrate sister positions along a discrete state trajectory.
///
/// Returns one track row per trajectory element. The first row is the
/// canonical initial record; every later row advances both positions by
/// (bias + force + noise)·dt with fresh noise drawn per sister, sister 1
/// first. The separation and center fields are recomputed from the updated
/// positions of the same row.
///
/// # Arguments
/// * `states` - Discrete joint-state trajectory driving the drift
/// * `params` - Speeds, noise scale, and step size
/// * `force` - Restoring-force constants
/// * `rng` - Random stream for this run
///
/// # Returns
/// * Track of the same length as `states`; empty input yields an empty track
pub fn simulate_track<R: Rng>(
    states: &[JointState],
    params: &IntegrationParameters,
    force: &ForceParameters,
    rng: &mut R,
) -> Result<Vec<TrackPoint>, ModelError> {
    let noise = Normal::new(0.0, params.noise_std).map_err(|_| ModelError::InvalidParameter {
        name: "noise_std",
        value: params.noise_std,
    })?;

    let mut track = Vec::with_capacity(states.len());
    if states.is_empty() {
        return Ok(track);
    }

    let mut positions = TrackPoint::initial().positions;
    track.push(TrackPoint::initial());

    for state in &states[1..] {
        let restoring = force.evaluate(positions);
        let bias = drift(*state, params.speeds);
        let x1 = positions[0] + (bias[0] + restoring[0] + noise.sample(rng)) * params.dt;
        let x2 = positions[1] + (bias[1] + restoring[1] + noise.sample(rng)) * params.dt;
        positions = [x1, x2];
        track.push(TrackPoint {
            positions,
            separation: x1 - x2,
            label: state.label(),
            center: 0.5 * (x1 + x2),
        });
    }
    Ok(track)
}
