//! Board module - piece lifecycle and collision resolution
//!
//! The board owns the grid of locked cells plus the current and next
//! piece. Every movement goes through `check_move`: wall clamping, floor
//! lock detection, and a horizontal slide attempt when the target overlaps
//! locked cells. Coordinates: (x, y) with x 0..n_cols left to right and
//! y 0..n_rows top to bottom; pieces spawn above the top at negative y.

use crate::core::grid::Grid;
use crate::core::piece::Piece;
use crate::core::rng::EngineRng;
use crate::core::shape::{Shape, ShapeKind};
use crate::core::texture::{Texture, TexturePool};
use crate::error::EngineError;
use crate::types::{Position, Vector, SPAWN_LEAD_ROWS};

/// Seed used when the host does not supply one
const DEFAULT_SEED: u32 = 1;

/// Board state: locked grid, current piece, next piece
#[derive(Debug, Clone)]
pub struct Board {
    n_rows: usize,
    n_cols: usize,
    grid: Grid,
    piece: Piece,
    next_piece: Piece,
    pool: TexturePool,
    rng: EngineRng,
}

impl Board {
    /// Create a board with the default seed
    ///
    /// Piece streams are deterministic; hosts wanting variety pass their
    /// own entropy through [`Board::with_seed`].
    pub fn new(n_rows: usize, n_cols: usize, pool: TexturePool) -> Self {
        Self::with_seed(n_rows, n_cols, pool, DEFAULT_SEED)
    }

    /// Create a board with an explicit RNG seed
    pub fn with_seed(n_rows: usize, n_cols: usize, pool: TexturePool, seed: u32) -> Self {
        let mut rng = EngineRng::new(seed);
        let piece = Self::random_piece(n_cols, &pool, &mut rng);
        let next_piece = Self::random_piece(n_cols, &pool, &mut rng);
        Self {
            n_rows,
            n_cols,
            grid: Grid::new(n_rows, n_cols),
            piece,
            next_piece,
            pool,
            rng,
        }
    }

    /// Fresh empty grid and a new current/next pair
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.n_rows, self.n_cols);
        self.next_piece = self.generate_piece();
        self.switch_piece();
    }

    fn random_piece(n_cols: usize, pool: &TexturePool, rng: &mut EngineRng) -> Piece {
        let kind = ShapeKind::ALL[rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let content = pool.contents()[rng.next_range(pool.len() as u32) as usize];
        let rot = rng.next_range(4) as i32;
        let anchor = Position::new(n_cols as i32 / 2, -SPAWN_LEAD_ROWS);
        Piece::new(anchor, Shape::new(kind, rot), Texture::new(content))
    }

    /// Draw a random piece above the visible top
    ///
    /// Anchor is (n_cols / 2, -2); kind, texture content and rotation are
    /// uniform draws from the variant set, the pool and 0..=3.
    pub fn generate_piece(&mut self) -> Piece {
        Self::random_piece(self.n_cols, &self.pool, &mut self.rng)
    }

    /// Promote the next piece to current and generate a new next
    pub fn switch_piece(&mut self) {
        self.piece = self.next_piece;
        self.next_piece = self.generate_piece();
        log::debug!(
            "switched to {} piece, {} next",
            self.piece.shape().kind().as_str(),
            self.next_piece.shape().kind().as_str()
        );
    }

    /// Hypothetical current piece moved by `vector`
    ///
    /// Board state is untouched; callers commit via [`Board::set_piece`]
    /// after the vector passed [`Board::check_move`].
    pub fn move_piece(&self, vector: Vector) -> Piece {
        self.piece.moved(vector)
    }

    /// Commit a piece as the current piece
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    /// Rotate the current piece a quarter turn
    ///
    /// There is no wall kick: a rotation ending out of range or on locked
    /// cells is accepted as-is and resolved by the next collision check.
    pub fn rotate_piece(&mut self, clockwise: bool) {
        let delta = if clockwise { 1 } else { -1 };
        self.piece.rotate(delta);
    }

    /// Resolve `vector` against walls, floor and locked cells
    ///
    /// Every cell the piece currently occupies is tested against the
    /// hypothetical move by the caller's vector; corrections accumulate
    /// in the returned vector. The piece's collapsed flag is overwritten
    /// with the outcome: set when the floor is reached or an overlap
    /// cannot be slid around, cleared otherwise.
    ///
    /// Returns `(overflow, adjusted)`. Overflow means some cell sits
    /// above the visible top before or after the move; combined with a
    /// collapse it signals that the stack has reached the roof.
    pub fn check_move(&mut self, vector: Vector) -> (bool, Vector) {
        let mut adjusted = vector;
        let mut overflow = false;
        let mut collapsed = false;

        for cell in self.piece.cells() {
            let moved = cell + vector;

            if moved.y < 0 || cell.y < 0 {
                overflow = true;
            }

            if moved.x < 0 {
                // Left wall: keep the least-negative correction over all cells
                adjusted.x = adjusted.x.max(-cell.x);
            } else if moved.x > self.n_cols as i32 - 1 {
                // Right wall, symmetric
                adjusted.x = adjusted.x.min(self.n_cols as i32 - 1 - cell.x);
            }

            if moved.y > self.n_rows as i32 - 1 {
                // Floor: stop vertical motion, the piece rests
                adjusted.y = 0;
                collapsed = true;
            } else if moved.y > 0 && self.grid.is_occupied(moved) {
                let (slid, stuck) = self.slide(cell, vector);
                adjusted = slid;
                collapsed = collapsed || stuck;
            }
        }

        self.piece.set_collapsed(collapsed);
        (overflow, adjusted)
    }

    /// Shrink the horizontal component toward zero until `cell` lands on
    /// a free grid cell
    ///
    /// Returns the reduced vector and whether the slide got stuck, i.e.
    /// the horizontal component ran out without finding a free landing.
    fn slide(&self, cell: Position, vector: Vector) -> (Vector, bool) {
        let mut candidate = vector;
        while candidate.x != 0 {
            candidate.x -= candidate.x.signum();
            if !self.grid.is_occupied(cell + candidate) {
                return (candidate, false);
            }
        }
        (candidate, true)
    }

    /// Commit the current piece's cells into the grid
    ///
    /// Only legal once the collapsed flag is confirmed. Every cell must
    /// be in range; the session handles the overflow case as game over
    /// before ever locking.
    pub fn lock_piece(&mut self) -> Result<(), EngineError> {
        if !self.piece.collapsed() {
            return Err(EngineError::PieceNotCollapsed);
        }
        let texture = self.piece.texture();
        for cell in self.piece.cells() {
            self.grid.set(cell, texture)?;
        }
        log::debug!(
            "locked {} piece at ({}, {})",
            self.piece.shape().kind().as_str(),
            self.piece.anchor().x,
            self.piece.anchor().y
        );
        Ok(())
    }

    /// Clear every full row, returning how many were cleared
    pub fn clear_lines(&mut self) -> usize {
        let cleared = self.grid.clear_rows();
        if cleared > 0 {
            log::info!("cleared {} row(s)", cleared);
        }
        cleared
    }

    pub fn is_piece_collapsed(&self) -> bool {
        self.piece.collapsed()
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next_piece
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for host setup (pre-filled fixtures, garbage
    /// rows and the like)
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn pool(&self) -> &TexturePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::texture::TextureContent;

    fn board() -> Board {
        Board::with_seed(10, 20, TexturePool::standard(), 42)
    }

    #[test]
    fn test_generate_piece_spawn_anchor() {
        let mut board = board();
        let piece = board.generate_piece();

        assert_eq!(piece.anchor(), Position::new(10, -2));
        assert!(!piece.collapsed());
    }

    #[test]
    fn test_generated_rotation_in_range() {
        let mut board = board();

        for _ in 0..50 {
            let piece = board.generate_piece();
            assert!(piece.rot() < 4);
            assert!(board.pool().contains(piece.texture().content()));
        }
    }

    #[test]
    fn test_seeded_boards_produce_identical_streams() {
        let mut a = Board::with_seed(10, 20, TexturePool::standard(), 7);
        let mut b = Board::with_seed(10, 20, TexturePool::standard(), 7);

        assert_eq!(a.piece(), b.piece());
        assert_eq!(a.next_piece(), b.next_piece());
        for _ in 0..20 {
            assert_eq!(a.generate_piece(), b.generate_piece());
        }
    }

    #[test]
    fn test_switch_piece_promotes_next() {
        let mut board = board();
        let next = *board.next_piece();

        board.switch_piece();

        assert_eq!(*board.piece(), next);
    }

    #[test]
    fn test_reset_empties_grid() {
        let mut board = board();
        board
            .grid_mut()
            .set(Position::new(3, 9), Texture::new(TextureContent::Red))
            .unwrap();

        board.reset();

        assert!(!board.grid().is_occupied(Position::new(3, 9)));
    }
}
