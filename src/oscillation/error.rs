//! Error type for model construction and simulation calls.

use thiserror::Error;

/// Terminal failure of a simulation call.
///
/// There is nothing to retry in a pure computation; every error aborts the
/// call and is surfaced to the caller (as `ValueError` across the Python
/// boundary).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelError {
    /// A sister label that is neither +1 nor -1.
    #[error("invalid sister state sign {0}; expected +1 or -1")]
    InvalidState(f64),
    /// A numeric parameter outside its valid range.
    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
