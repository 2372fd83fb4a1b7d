//! Shape tables - per-variant rotation-state offsets
//!
//! Each of the 7 tetromino variants has 4 rotation states, and each state
//! is a fixed table of 4 cell offsets. Rotating is a pure index step into
//! the table; geometry is never recomputed.

use crate::types::Vector;

/// The 7 tetromino variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    O,
    I,
    S,
    Z,
    L,
    J,
    T,
}

impl ShapeKind {
    /// All variants, in generation order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::O,
        ShapeKind::I,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::T,
    ];

    /// Parse a variant from its letter (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(ShapeKind::O),
            "i" => Some(ShapeKind::I),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "t" => Some(ShapeKind::T),
            _ => None,
        }
    }

    /// Lowercase letter for this variant
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::O => "o",
            ShapeKind::I => "i",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::T => "t",
        }
    }

    fn table(&self) -> &'static RotationTable {
        match self {
            ShapeKind::O => &O_TABLE,
            ShapeKind::I => &I_TABLE,
            ShapeKind::S => &S_TABLE,
            ShapeKind::Z => &Z_TABLE,
            ShapeKind::L => &L_TABLE,
            ShapeKind::J => &J_TABLE,
            ShapeKind::T => &T_TABLE,
        }
    }
}

/// The 4 cell offsets of one rotation state
pub type ShapeOffsets = [Vector; 4];

/// Offset rows for the 4 rotation states
pub type RotationTable = [ShapeOffsets; 4];

const fn v(x: i32, y: i32) -> Vector {
    Vector::new(x, y)
}

/// O: rotationally symmetric, all 4 states identical
const O_TABLE: RotationTable = [[v(1, 0), v(2, 0), v(1, 1), v(2, 1)]; 4];

const I_TABLE: RotationTable = [
    [v(0, 1), v(1, 1), v(2, 1), v(3, 1)],
    [v(2, 0), v(2, 1), v(2, 2), v(2, 3)],
    [v(0, 2), v(1, 2), v(2, 2), v(3, 2)],
    [v(1, 0), v(1, 1), v(1, 2), v(1, 3)],
];

const S_TABLE: RotationTable = [
    [v(1, 0), v(2, 0), v(0, 1), v(1, 1)],
    [v(1, 0), v(1, 1), v(2, 1), v(2, 2)],
    [v(1, 1), v(2, 1), v(0, 2), v(1, 2)],
    [v(0, 0), v(0, 1), v(1, 1), v(1, 2)],
];

const Z_TABLE: RotationTable = [
    [v(0, 0), v(1, 0), v(1, 1), v(2, 1)],
    [v(2, 0), v(1, 1), v(2, 1), v(1, 2)],
    [v(0, 1), v(1, 1), v(1, 2), v(2, 2)],
    [v(1, 0), v(0, 1), v(1, 1), v(0, 2)],
];

const L_TABLE: RotationTable = [
    [v(2, 0), v(0, 1), v(1, 1), v(2, 1)],
    [v(1, 0), v(1, 1), v(1, 2), v(2, 2)],
    [v(0, 1), v(1, 1), v(2, 1), v(0, 2)],
    [v(0, 0), v(1, 0), v(1, 1), v(1, 2)],
];

const J_TABLE: RotationTable = [
    [v(0, 0), v(0, 1), v(1, 1), v(2, 1)],
    [v(1, 0), v(2, 0), v(1, 1), v(1, 2)],
    [v(0, 1), v(1, 1), v(2, 1), v(2, 2)],
    [v(1, 0), v(1, 1), v(0, 2), v(1, 2)],
];

const T_TABLE: RotationTable = [
    [v(1, 0), v(0, 1), v(1, 1), v(2, 1)],
    [v(1, 0), v(1, 1), v(2, 1), v(1, 2)],
    [v(0, 1), v(1, 1), v(2, 1), v(1, 2)],
    [v(1, 0), v(0, 1), v(1, 1), v(1, 2)],
];

/// A variant bound to one of its 4 rotation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    rot: u8,
}

impl Shape {
    /// Bind a variant to a rotation index, normalized modulo 4
    pub fn new(kind: ShapeKind, rot: i32) -> Self {
        Self {
            kind,
            rot: rot.rem_euclid(4) as u8,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Current rotation index, always in `0..=3`
    pub fn rot(&self) -> u8 {
        self.rot
    }

    /// Step the rotation index by `delta`; multiples of 4 are no-ops
    pub fn rotate(&mut self, delta: i32) {
        self.rot = (self.rot as i32 + delta).rem_euclid(4) as u8;
    }

    /// Cell offsets of the current rotation state
    pub fn offsets(&self) -> ShapeOffsets {
        self.kind.table()[self.rot as usize]
    }
}
