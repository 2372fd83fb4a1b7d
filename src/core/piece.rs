//! The falling piece
//!
//! An anchor position plus a shape bound to a rotation state and a
//! texture. Moving builds a new piece; rotating steps in place. The board
//! decides collapse, the piece only records it.

use crate::core::shape::Shape;
use crate::core::texture::Texture;
use crate::types::{Position, Vector};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    anchor: Position,
    shape: Shape,
    texture: Texture,
    collapsed: bool,
}

impl Piece {
    /// Create a piece at the given anchor; it starts not collapsed
    pub fn new(anchor: Position, shape: Shape, texture: Texture) -> Self {
        Self {
            anchor,
            shape,
            texture,
            collapsed: false,
        }
    }

    /// New piece with the anchor shifted by `vector`
    ///
    /// Shape, texture and rotation carry over; the copy starts not
    /// collapsed. No bounds check happens here, the board validates a
    /// vector before the move is committed.
    pub fn moved(&self, vector: Vector) -> Piece {
        Piece::new(self.anchor + vector, self.shape, self.texture)
    }

    /// Step the rotation state by `delta`; multiples of 4 are no-ops
    pub fn rotate(&mut self, delta: i32) {
        self.shape.rotate(delta);
    }

    /// The 4 absolute cells the piece occupies, in table order
    pub fn cells(&self) -> [Position; 4] {
        self.shape.offsets().map(|offset| self.anchor + offset)
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn texture(&self) -> Texture {
        self.texture
    }

    /// Current rotation index of the owned shape
    pub fn rot(&self) -> u8 {
        self.shape.rot()
    }

    /// Resting flag, driven by the board after collision resolution
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }
}

impl IntoIterator for &Piece {
    type Item = Position;
    type IntoIter = std::array::IntoIter<Position, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells().into_iter()
    }
}
