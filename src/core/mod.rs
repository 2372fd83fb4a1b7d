//! Core module - pure game logic with no external dependencies
//!
//! This module contains the game rules and state: grid storage, piece
//! movement and collision, speed curves, and the session driver. It has
//! zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;
pub mod speed;
pub mod texture;

// Re-export commonly used types
pub use board::Board;
pub use grid::{Cell, Grid};
pub use piece::Piece;
pub use rng::EngineRng;
pub use session::{Session, StepReport};
pub use shape::{Shape, ShapeKind};
pub use snapshot::{PieceSnapshot, SessionSnapshot};
pub use speed::{
    create_accelerator, create_speed_generator, Accelerator, AcceleratorKind, SpeedGenerator,
};
pub use texture::{Texture, TextureContent, TexturePool};
