use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, ScaleError>;

/// Errors raised while constructing a scale.
///
/// Mapping a value through an already-built scale never fails; every
/// check happens once, up front, in the constructor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    #[error("scale range must contain at least one value")]
    EmptyRange,

    #[error("band scale domain must contain at least one key")]
    EmptyDomain,

    #[error("logarithmic domain must be strictly positive, got [{min}, {max}]")]
    InvalidLogDomain { min: f64, max: f64 },

    #[error("logarithm base must be positive and not equal to 1, got {0}")]
    InvalidLogBase(f64),

    #[error("invalid hex color {0:?}, expected #rrggbb")]
    InvalidHexColor(String),
}
