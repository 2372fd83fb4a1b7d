//! Deterministic falling-block puzzle core.
//!
//! The engine owns the grid, the active piece and the scoring/speed state,
//! and advances on host-driven ticks. Nothing here draws or reads input;
//! hosts feed [`Session::step`] a time delta plus a movement vector and
//! render from [`SessionSnapshot`].
//!
//! ```
//! use tetris_engine::{Session, SessionConfig, Vector};
//!
//! let config = SessionConfig {
//!     seed: Some(42),
//!     ..SessionConfig::default()
//! };
//! let mut session = Session::new(config)?;
//! let report = session.step(0.016, Vector::RIGHT)?;
//! assert!(!report.game_over);
//! # Ok::<(), tetris_engine::EngineError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use config::SessionConfig;
pub use core::{
    AcceleratorKind, Board, Cell, EngineRng, Grid, Piece, PieceSnapshot, Session,
    SessionSnapshot, Shape, ShapeKind, StepReport, Texture, TextureContent, TexturePool,
};
pub use error::EngineError;
pub use types::{Factor, Position, Rgb, Vector};
