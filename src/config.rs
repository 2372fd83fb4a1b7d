//! Session configuration
//!
//! Hosts deserialize this from their settings store; defaults mirror the
//! classic game parameters.

use serde::{Deserialize, Serialize};

use crate::core::speed::AcceleratorKind;
use crate::error::EngineError;
use crate::types::{Factor, DEFAULT_INIT_LEVEL, DEFAULT_N_COLS, DEFAULT_N_ROWS};

/// Parameters of a play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Grid height in rows
    pub n_rows: usize,
    /// Grid width in columns
    pub n_cols: usize,
    /// Level the session starts (and resets) at
    pub init_level: u32,
    /// Level-to-speed curve parameters (a = base, b = per-level step)
    pub speed_factor: Factor,
    /// Accelerator curve parameters
    pub accelerator_factor: Factor,
    /// Which accelerator curve `accelerate()` applies
    pub accelerator: AcceleratorKind,
    /// RNG seed for the piece stream; None uses the engine default
    pub seed: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            n_rows: DEFAULT_N_ROWS,
            n_cols: DEFAULT_N_COLS,
            init_level: DEFAULT_INIT_LEVEL,
            speed_factor: Factor::new(1.0, 0.05, 0.0),
            accelerator_factor: Factor::new(1.0, 0.0, 0.0),
            accelerator: AcceleratorKind::Linear,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Reject configurations the engine cannot run
    ///
    /// Dimensions must fit a 4-cell shape and the starting level must be
    /// at least 1 (level 0 is not reachable from any score).
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.n_rows < 4 || self.n_cols < 4 {
            return Err(EngineError::InvalidConfig(format!(
                "grid {}x{} is too small, both dimensions must be at least 4",
                self.n_rows, self.n_cols
            )));
        }
        if self.init_level < 1 {
            return Err(EngineError::InvalidConfig(
                "init_level must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
