//! Discrete polymerization state of a sister-kinetochore pair.
//!
//! Each sister fiber is either growing or shrinking. The pair is classified
//! by whether the two sisters move in opposite directions (coherent, the
//! directed-oscillation regime) or in the same direction (incoherent).

use super::error::ModelError;

/// Polymerization state of a single kinetochore fiber.
///
/// Trajectory arrays encode this as a ±1 sign: +1 growing, -1 shrinking.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SisterState {
    /// Polymerizing, sign +1.
    Growing,
    /// Depolymerizing, sign -1.
    Shrinking,
}

impl SisterState {
    /// Decode from the ±1 sign convention.
    ///
    /// Any other value is rejected; signs arriving from untyped arrays are
    /// validated here rather than silently passed through.
    pub fn from_sign(sign: f64) -> Result<Self, ModelError> {
        if sign == 1.0 {
            Ok(SisterState::Growing)
        } else if sign == -1.0 {
            Ok(SisterState::Shrinking)
        } else {
            Err(ModelError::InvalidState(sign))
        }
    }

    /// Encode as a ±1 sign.
    pub fn sign(self) -> f64 {
        match self {
            SisterState::Growing => 1.0,
            SisterState::Shrinking => -1.0,
        }
    }

    /// The opposite polymerization state.
    pub fn flipped(self) -> Self {
        match self {
            SisterState::Growing => SisterState::Shrinking,
            SisterState::Shrinking => SisterState::Growing,
        }
    }
}

/// Coherence regime of a sister pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Regime {
    /// The sisters move in opposite directions.
    Coherent,
    /// The sisters move in the same direction.
    Incoherent,
}

/// Joint state of the two sisters.
///
/// Exactly four joint states are representable; classification into a
/// regime and the integer annotation are total functions over them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct JointState {
    pub sister1: SisterState,
    pub sister2: SisterState,
}

impl JointState {
    pub fn new(sister1: SisterState, sister2: SisterState) -> Self {
        Self { sister1, sister2 }
    }

    /// Decode a ±1 sign pair, rejecting anything else.
    pub fn from_signs(sign1: f64, sign2: f64) -> Result<Self, ModelError> {
        Ok(Self {
            sister1: SisterState::from_sign(sign1)?,
            sister2: SisterState::from_sign(sign2)?,
        })
    }

    /// Encode as a ±1 sign pair.
    pub fn signs(self) -> [f64; 2] {
        [self.sister1.sign(), self.sister2.sign()]
    }

    /// Coherent when the sisters move in opposite directions.
    pub fn regime(self) -> Regime {
        if self.sister1 == self.sister2 {
            Regime::Incoherent
        } else {
            Regime::Coherent
        }
    }

    /// Integer annotation recorded in track output.
    ///
    /// Fixed encoding: (-1,+1) -> 0, (-1,-1) -> 1, (+1,-1) -> 2,
    /// (+1,+1) -> 3.
    pub fn label(self) -> u8 {
        match (self.sister1, self.sister2) {
            (SisterState::Shrinking, SisterState::Growing) => 0,
            (SisterState::Shrinking, SisterState::Shrinking) => 1,
            (SisterState::Growing, SisterState::Shrinking) => 2,
            (SisterState::Growing, SisterState::Growing) => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_states() -> [JointState; 4] {
        [
            JointState::new(SisterState::Shrinking, SisterState::Growing),
            JointState::new(SisterState::Shrinking, SisterState::Shrinking),
            JointState::new(SisterState::Growing, SisterState::Shrinking),
            JointState::new(SisterState::Growing, SisterState::Growing),
        ]
    }

    #[test]
    fn test_sign_round_trip() {
        assert_eq!(SisterState::from_sign(1.0).unwrap(), SisterState::Growing);
        assert_eq!(SisterState::from_sign(-1.0).unwrap(), SisterState::Shrinking);
        assert_eq!(SisterState::Growing.sign(), 1.0);
        assert_eq!(SisterState::Shrinking.sign(), -1.0);
    }

    #[test]
    fn test_from_sign_rejects_other_values() {
        for bad in [0.0, 2.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SisterState::from_sign(bad),
                Err(ModelError::InvalidState(_))
            ));
        }
    }

    #[test]
    fn test_regime_partitions_states() {
        // Opposite signs are coherent, equal signs incoherent; every state
        // lands in exactly one regime.
        let [opp1, same1, opp2, same2] = all_states();
        assert_eq!(opp1.regime(), Regime::Coherent);
        assert_eq!(opp2.regime(), Regime::Coherent);
        assert_eq!(same1.regime(), Regime::Incoherent);
        assert_eq!(same2.regime(), Regime::Incoherent);
    }

    #[test]
    fn test_label_encoding() {
        let labels: Vec<u8> = all_states().iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_flipped_is_involution() {
        for state in [SisterState::Growing, SisterState::Shrinking] {
            assert_ne!(state.flipped(), state);
            assert_eq!(state.flipped().flipped(), state);
        }
    }
}
