use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Errors raised at the contract boundaries of the numeric routines.
#[derive(Debug, Clone, PartialEq)]
pub enum MlError {
    /// Empty input or an out-of-range parameter.
    InvalidArgument(String),
    /// Two parallel sequences have different lengths.
    LengthMismatch { left: usize, right: usize },
    /// A statistic needs more elements than were supplied.
    InsufficientData { required: usize, actual: usize },
    /// Matrix operands with incompatible dimensions.
    ShapeMismatch(String),
    /// Malformed persisted model text or enum value.
    Parse(String),
}

impl MlError {
    pub(crate) fn empty(what: &str) -> Self {
        MlError::InvalidArgument(format!("{} must not be empty", what))
    }
}

impl fmt::Display for MlError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MlError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            MlError::LengthMismatch { left, right } => write!(
                f,
                "Sequences must have equal lengths (got {} and {})",
                left, right
            ),
            MlError::InsufficientData { required, actual } => write!(
                f,
                "At least {} values are required, got {}",
                required, actual
            ),
            MlError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
            MlError::Parse(msg) => write!(f, "Failed to parse: {}", msg),
        }
    }
}

impl Error for MlError {}

impl From<ShapeError> for MlError {
    fn from(err: ShapeError) -> Self {
        MlError::ShapeMismatch(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MlError>;

/// Fail with `LengthMismatch` unless both lengths agree.
pub(crate) fn ensure_same_len(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(MlError::LengthMismatch { left, right });
    }
    Ok(())
}
