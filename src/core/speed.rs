//! Speed curves and accelerators
//!
//! Pure functions mapping level and acceleration count to the falling
//! speed (seconds per one-row descent). [`Factor`] carries the curve
//! parameters; the session owns the resulting speed state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::Factor;

/// Seconds per one-row descent at `level`
///
/// Reads `factor.a` (base speed) and `factor.b` (per-level decrement).
pub fn speed(level: u32, factor: Factor) -> f64 {
    factor.a - level as f64 * factor.b
}

/// Decrease speed by a fixed amount per acceleration count
///
/// Reads `factor.a` (per-count decrement).
pub fn linear_accelerator(start_speed: f64, count: u32, factor: Factor) -> f64 {
    start_speed - factor.a * count as f64
}

/// Decrease speed by a power curve of the acceleration count
///
/// Reads `factor.a` (scale) and `factor.b` (exponent).
pub fn nonlinear_accelerator(start_speed: f64, count: u32, factor: Factor) -> f64 {
    start_speed - factor.a * (count as f64).powf(factor.b)
}

/// Level-to-speed function selected by configuration
pub type SpeedGenerator = fn(u32, Factor) -> f64;

/// Acceleration function selected by configuration
pub type Accelerator = fn(f64, u32, Factor) -> f64;

/// Known accelerator curves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcceleratorKind {
    #[default]
    Linear,
    NonLinear,
}

impl AcceleratorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcceleratorKind::Linear => "linear",
            AcceleratorKind::NonLinear => "nonlinear",
        }
    }
}

impl FromStr for AcceleratorKind {
    type Err = EngineError;

    /// Accepts "linear"/"nonlinear"; any other key is a configuration
    /// error rather than a silent fallback
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(AcceleratorKind::Linear),
            "nonlinear" => Ok(AcceleratorKind::NonLinear),
            _ => Err(EngineError::UnknownAccelerator(s.to_string())),
        }
    }
}

/// Accelerator function for a validated kind
pub fn create_accelerator(kind: AcceleratorKind) -> Accelerator {
    match kind {
        AcceleratorKind::Linear => linear_accelerator,
        AcceleratorKind::NonLinear => nonlinear_accelerator,
    }
}

/// The level-to-speed function
pub fn create_speed_generator() -> SpeedGenerator {
    speed
}
