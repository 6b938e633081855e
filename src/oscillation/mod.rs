//! Stochastic model of metaphase sister-kinetochore oscillations.
//!
//! Two coupled pieces:
//! - a discrete-time Markov chain over the pair's joint polymerization
//!   state, with one hold probability per coherence regime;
//! - an Euler–Maruyama integrator that advances the sisters' positions
//!   under a spring/damping restoring force, a state-dependent poleward
//!   bias, and additive Gaussian noise.
//!
//! The discrete trajectory drives the integrator; positions never feed
//! back into the discrete process. Both simulators take an explicit random
//! stream, so independent runs with independent streams are safe to run in
//! parallel by the caller.

pub mod error;
pub mod force;
pub mod integrator;
pub mod markov;
pub mod state;

pub use error::ModelError;
pub use force::ForceParameters;
pub use integrator::{simulate_track, IntegrationParameters, TrackPoint};
pub use markov::{simulate_states, TransitionProbabilities};
pub use state::{JointState, Regime, SisterState};
