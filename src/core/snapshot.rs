use crate::core::piece::Piece;
use crate::core::session::Session;
use crate::core::shape::ShapeKind;
use crate::types::{Position, Rgb};

/// A piece frozen at snapshot time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    pub rot: u8,
    pub anchor: Position,
    /// Absolute cell positions, anchor already applied
    pub cells: [Position; 4],
    pub rgb: Rgb,
}

impl From<Piece> for PieceSnapshot {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.shape().kind(),
            rot: piece.rot(),
            anchor: piece.anchor(),
            cells: piece.cells(),
            rgb: piece.texture().rgb(),
        }
    }
}

/// Session state a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSnapshot {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub falling_speed: f64,
    pub game_over: bool,
    pub piece: PieceSnapshot,
    pub next_piece: PieceSnapshot,
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        Self {
            score: session.score(),
            level: session.level(),
            lines: session.lines(),
            falling_speed: session.falling_speed(),
            game_over: session.game_over(),
            piece: PieceSnapshot::from(*session.board().piece()),
            next_piece: PieceSnapshot::from(*session.board().next_piece()),
        }
    }
}
