//! Core value types shared across the engine
//!
//! Pure data: coordinates, displacements, colors and curve parameters that
//! the engine exchanges with its collaborators.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Default board dimensions
pub const DEFAULT_N_ROWS: usize = 10;
pub const DEFAULT_N_COLS: usize = 20;

/// Default starting level
pub const DEFAULT_INIT_LEVEL: u32 = 1;

/// Score needed per level step (level = score / 100 + 1)
pub const SCORE_PER_LEVEL: u32 = 100;

/// Line clear scoring (Classic rules), indexed by lines cleared
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Rows above the visible top where new pieces spawn
pub const SPAWN_LEAD_ROWS: i32 = 2;

/// A 2D displacement in grid units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0, 0);
    pub const LEFT: Vector = Vector::new(-1, 0);
    pub const RIGHT: Vector = Vector::new(1, 0);
    pub const DOWN: Vector = Vector::new(0, 1);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True iff both components are zero
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<i32> for Vector {
    type Output = Vector;

    fn mul(self, value: i32) -> Vector {
        Vector::new(self.x * value, self.y * value)
    }
}

/// An absolute cell coordinate
///
/// `y` grows downward; pieces spawning above the visible board carry a
/// negative `y` until they descend into range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add<Vector> for Position {
    type Output = Position;

    fn add(self, vector: Vector) -> Position {
        Position::new(self.x + vector.x, self.y + vector.y)
    }
}

impl Sub<Vector> for Position {
    type Output = Position;

    fn sub(self, vector: Vector) -> Position {
        Position::new(self.x - vector.x, self.y - vector.y)
    }
}

/// Color triple handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Numeric triple parameterizing speed and accelerator curves
///
/// Unused components default to zero; each curve documents which
/// components it reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Factor {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Factor {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}
