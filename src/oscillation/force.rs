//! Deterministic restoring force on the sister pair.
//!
//! A linear spring couples the sisters toward their rest separation and a
//! linear damping term pulls each sister independently toward the spindle
//! equator at the origin. Pure arithmetic, no randomness.

/// Spring and damping constants for the inter-sister linkage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceParameters {
    /// Rest inter-sister separation L.
    pub rest_length: f64,
    /// Spring stiffness κ.
    pub stiffness: f64,
    /// Linear damping coefficient α.
    pub damping: f64,
}

impl Default for ForceParameters {
    fn default() -> Self {
        Self {
            rest_length: 0.8,
            stiffness: 0.025,
            damping: 0.01,
        }
    }
}

impl ForceParameters {
    /// Create force parameters with custom constants.
    pub fn new(rest_length: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            rest_length,
            stiffness,
            damping,
        }
    }

    /// Force on each sister at the given positions.
    ///
    /// The separation seen by sister 1 is x₁−x₂ and its negation for
    /// sister 2, so the spring terms are equal and opposite. The rest
    /// length enters without a projection factor; the sisters move along
    /// a fixed spindle axis.
    pub fn evaluate(&self, positions: [f64; 2]) -> [f64; 2] {
        let [x1, x2] = positions;
        [
            -(self.stiffness * (x1 - x2 - self.rest_length)) - self.damping * x1,
            -(self.stiffness * (x2 - x1 + self.rest_length)) - self.damping * x2,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let params = ForceParameters::default();
        assert_eq!(params.rest_length, 0.8);
        assert_eq!(params.stiffness, 0.025);
        assert_eq!(params.damping, 0.01);
    }

    #[test]
    fn test_fixture_at_rest_separation() {
        // At x = [0.4, -0.4] the spring term vanishes (separation equals the
        // rest length) and only the damping term remains.
        let params = ForceParameters::default();
        let force = params.evaluate([0.4, -0.4]);
        assert!((force[0] - (-0.004)).abs() < 1e-12);
        assert!((force[1] - 0.004).abs() < 1e-12);
    }

    #[test]
    fn test_zero_force_at_rest_without_damping() {
        let params = ForceParameters::new(0.8, 0.025, 0.0);
        let force = params.evaluate([0.4, -0.4]);
        assert_eq!(force, [0.0, 0.0]);
    }

    #[test]
    fn test_spring_terms_are_equal_and_opposite() {
        let params = ForceParameters::new(0.8, 0.025, 0.0);
        let force = params.evaluate([1.3, -0.2]);
        assert!((force[0] + force[1]).abs() < 1e-12);
    }

    #[test]
    fn test_spring_restores_toward_rest_length() {
        let params = ForceParameters::new(0.8, 0.025, 0.0);
        // Overstretched pair: sister 1 pulled back, sister 2 pulled forward.
        let stretched = params.evaluate([1.0, -1.0]);
        assert!(stretched[0] < 0.0);
        assert!(stretched[1] > 0.0);
        // Compressed pair: forces reverse.
        let compressed = params.evaluate([0.1, -0.1]);
        assert!(compressed[0] > 0.0);
        assert!(compressed[1] < 0.0);
    }
}
