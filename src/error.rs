//! Error types for scene configuration and mesh construction.

use core::fmt;

/// Errors raised while validating configuration or building a cloth.
///
/// Per-frame operations (stepping, tearing) never fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid needs at least one row and one column.
    InvalidGridDimensions { rows: usize, cols: usize },
    /// Spacing must be positive and finite.
    InvalidSpacing,
    /// World bounds must be finite with positive width and height.
    InvalidBounds,
    /// Time step limits must be positive and finite.
    InvalidTimeStep,
    /// Gravity, tear reach or particle radius factor is out of range.
    InvalidParameter(&'static str),
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions { rows, cols } => {
                write!(f, "grid must be at least 1x1 (got {} rows, {} cols)", rows, cols)
            }
            ClothError::InvalidSpacing => write!(f, "spacing must be positive and finite"),
            ClothError::InvalidBounds => {
                write!(f, "bounds must be finite with positive width and height")
            }
            ClothError::InvalidTimeStep => write!(f, "time step must be positive and finite"),
            ClothError::InvalidParameter(name) => write!(f, "invalid parameter: {}", name),
        }
    }
}
