//! Engine errors
//!
//! Every detected anomaly is surfaced to the owning session or host;
//! nothing is recovered internally.

use thiserror::Error;

/// Errors produced by engine operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Grid write outside the valid cell range
    #[error("cell ({x}, {y}) is outside the {n_rows}x{n_cols} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        n_rows: usize,
        n_cols: usize,
    },

    /// Lock attempted before the piece came to rest
    #[error("piece is not collapsed, lock refused")]
    PieceNotCollapsed,

    /// Accelerator name outside the known set
    #[error("unknown accelerator kind \"{0}\"")]
    UnknownAccelerator(String),

    /// Configuration rejected at session construction
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    /// Stable machine-readable code for host protocols
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::OutOfBounds { .. } => "out_of_bounds",
            EngineError::PieceNotCollapsed => "piece_not_collapsed",
            EngineError::UnknownAccelerator(_) => "unknown_accelerator",
            EngineError::InvalidConfig(_) => "invalid_config",
        }
    }
}
