//! Engine error types.

use thiserror::Error;

use crate::consts::{GRID_SIZE, MAX_RAY_STEPS};

/// Errors surfaced by the board and ray-tracing API.
///
/// The out-of-range variants are caller contract violations and are raised
/// at the offending call. `RayLoop` guards the tracer's step ceiling; no
/// known atom layout produces it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A cell coordinate fell outside the grid.
    #[error("cell ({x}, {y}) is outside the {GRID_SIZE}x{GRID_SIZE} grid")]
    CellOutOfRange { x: u8, y: u8 },

    /// A border offset fell outside the valid range.
    #[error("border offset {0} is outside 0..{GRID_SIZE}")]
    OffsetOutOfRange(u8),

    /// A ray failed to terminate within the step ceiling.
    #[error("ray still in flight after {MAX_RAY_STEPS} steps")]
    RayLoop,
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::CellOutOfRange { x: 9, y: 2 };
        assert_eq!(err.to_string(), "cell (9, 2) is outside the 8x8 grid");

        let err = EngineError::OffsetOutOfRange(12);
        assert_eq!(err.to_string(), "border offset 12 is outside 0..8");

        assert_eq!(
            EngineError::RayLoop.to_string(),
            "ray still in flight after 256 steps"
        );
    }
}
