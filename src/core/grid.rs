//! Grid module - the matrix of locked cells
//!
//! Flat row-major storage with runtime dimensions; a cell holds the
//! texture of the piece that locked there. Coordinates: (x, y) with x
//! ranging over columns left to right and y over rows top to bottom.

use crate::core::texture::Texture;
use crate::error::EngineError;
use crate::types::Position;

/// A single grid cell (None = empty, Some = locked texture)
pub type Cell = Option<Texture>;

/// Matrix of locked cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    n_rows: usize,
    n_cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            cells: vec![None; n_rows * n_cols],
        }
    }

    /// Flat index for (x, y), None when out of range
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.n_cols as i32 || y < 0 || y >= self.n_rows as i32 {
            return None;
        }
        Some((y as usize) * self.n_cols + (x as usize))
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Cell at `position`
    /// Returns None if out of range
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.index(position.x, position.y).map(|idx| self.cells[idx])
    }

    /// Write a texture at `position`
    ///
    /// An out-of-range write is a caller error and is reported as such
    /// instead of being dropped.
    pub fn set(&mut self, position: Position, texture: Texture) -> Result<(), EngineError> {
        match self.index(position.x, position.y) {
            Some(idx) => {
                self.cells[idx] = Some(texture);
                Ok(())
            }
            None => Err(EngineError::OutOfBounds {
                x: position.x,
                y: position.y,
                n_rows: self.n_rows,
                n_cols: self.n_cols,
            }),
        }
    }

    /// True iff the cell is in range and holds a texture
    pub fn is_occupied(&self, position: Position) -> bool {
        matches!(self.get(position), Some(Some(_)))
    }

    /// True iff every cell of row `y` is occupied
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.n_rows {
            return false;
        }
        let start = y * self.n_cols;
        self.cells[start..start + self.n_cols]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every full row and prepend that many empty rows at the top
    ///
    /// Surviving rows keep their relative order; a row above k cleared
    /// rows moves down by exactly k. Returns the number of cleared rows.
    pub fn clear_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_y = self.n_rows;

        // Scan bottom to top, compacting surviving rows downward
        for read_y in (0..self.n_rows).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * self.n_cols;
                    let dst = write_y * self.n_cols;
                    self.cells.copy_within(src..src + self.n_cols, dst);
                }
            }
        }

        // Fresh empty rows at the top
        for cell in &mut self.cells[..write_y * self.n_cols] {
            *cell = None;
        }

        cleared
    }

    /// Visit every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(idx, cell)| {
            let x = (idx % self.n_cols) as i32;
            let y = (idx / self.n_cols) as i32;
            (Position::new(x, y), *cell)
        })
    }
}
