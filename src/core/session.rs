//! Session driver
//!
//! Owns the board plus scoring, level and speed state, and advances the
//! game one tick at a time via [`step`](Session::step).

use crate::config::SessionConfig;
use crate::core::board::Board;
use crate::core::snapshot::SessionSnapshot;
use crate::core::speed::{create_accelerator, create_speed_generator, Accelerator, SpeedGenerator};
use crate::core::texture::TexturePool;
use crate::error::EngineError;
use crate::types::{Vector, LINE_SCORES, SCORE_PER_LEVEL};

/// What a single [`Session::step`] call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// The active piece moved to a new position
    pub moved: bool,
    /// The active piece was locked into the grid
    pub locked: bool,
    /// Rows cleared by this step
    pub lines_cleared: usize,
    /// The session level went up
    pub leveled_up: bool,
    /// The session is over (set on the ending step and every step after)
    pub game_over: bool,
}

/// A running game: board, score, level and the gravity clock
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    speed_generator: SpeedGenerator,
    accelerator: Accelerator,
    score: u32,
    level: u32,
    lines: u32,
    falling_speed: f64,
    fall_time: f64,
    accelerate_count: u32,
    game_over: bool,
}

impl Session {
    /// Create a session from a validated configuration
    pub fn new(config: SessionConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let pool = TexturePool::standard();
        let board = match config.seed {
            Some(seed) => Board::with_seed(config.n_rows, config.n_cols, pool, seed),
            None => Board::new(config.n_rows, config.n_cols, pool),
        };
        let speed_generator = create_speed_generator();
        let accelerator = create_accelerator(config.accelerator);
        let level = config.init_level;
        let falling_speed = speed_generator(level, config.speed_factor);
        Ok(Self {
            config,
            board,
            speed_generator,
            accelerator,
            score: 0,
            level,
            lines: 0,
            falling_speed,
            fall_time: 0.0,
            accelerate_count: 0,
            game_over: false,
        })
    }

    /// Restart the session in place, keeping the configuration
    pub fn reset(&mut self) {
        self.score = 0;
        self.lines = 0;
        self.level = self.config.init_level;
        self.accelerate_count = 0;
        self.fall_time = 0.0;
        self.game_over = false;
        self.board.reset();
        self.reset_falling_speed();
        log::info!("session reset at level {}", self.level);
    }

    /// Advance the game by `dt_seconds`, applying the host `input` vector.
    ///
    /// Gravity accumulates across calls: once the elapsed time reaches the
    /// current falling speed, a downward step is folded into the input for
    /// this tick. Collision resolution may clamp, slide or collapse the
    /// piece; a collapsed piece is locked into the grid, full rows are
    /// cleared and scored, and the next piece enters play.
    ///
    /// Once the session has ended every call returns a report with
    /// `game_over` set and leaves all state untouched.
    pub fn step(&mut self, dt_seconds: f64, input: Vector) -> Result<StepReport, EngineError> {
        let mut report = StepReport::default();
        if self.game_over {
            report.game_over = true;
            return Ok(report);
        }

        let mut vector = input;
        self.fall_time += dt_seconds;
        if self.fall_time >= self.falling_speed {
            vector = vector + Vector::DOWN;
            self.fall_time = 0.0;
        }
        if vector.is_zero() {
            return Ok(report);
        }

        let (overflow, adjusted) = self.board.check_move(vector);

        if self.board.is_piece_collapsed() {
            if overflow {
                self.game_over = true;
                report.game_over = true;
                log::info!("game over at score {}", self.score);
                return Ok(report);
            }
            self.board.lock_piece()?;
            let cleared = self.board.clear_lines();
            self.score += LINE_SCORES[cleared.min(4)];
            self.lines += cleared as u32;
            report.locked = true;
            report.lines_cleared = cleared;
            if self.should_upgrade_level() {
                self.upgrade_level();
                report.leveled_up = true;
            }
            self.board.switch_piece();
            self.reset_falling_speed();
            self.fall_time = 0.0;
        } else if !adjusted.is_zero() {
            let moved = self.board.move_piece(adjusted);
            self.board.set_piece(moved);
            report.moved = true;
        }

        Ok(report)
    }

    /// Speed the current level prescribes, before any acceleration
    pub fn level_speed(&self) -> f64 {
        (self.speed_generator)(self.level, self.config.speed_factor)
    }

    /// Drop any acceleration and adopt the current level speed
    pub fn reset_falling_speed(&mut self) {
        self.falling_speed = self.level_speed();
    }

    /// Level the current score earns, independent of the stored level
    pub fn calculate_level(&self) -> u32 {
        self.score / SCORE_PER_LEVEL + 1
    }

    /// Whether the score has outgrown the stored level
    pub fn should_upgrade_level(&self) -> bool {
        self.calculate_level() > self.level
    }

    /// Adopt the score-derived level
    ///
    /// The falling speed is untouched here; callers follow up with
    /// [`reset_falling_speed`](Session::reset_falling_speed) when the new
    /// level should take effect.
    pub fn upgrade_level(&mut self) {
        self.level = self.calculate_level();
        log::info!("level up to {}", self.level);
    }

    /// Apply one step of the configured accelerator curve
    pub fn accelerate(&mut self) {
        self.falling_speed = (self.accelerator)(
            self.falling_speed,
            self.accelerate_count,
            self.config.accelerator_factor,
        );
        self.accelerate_count += 1;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total rows cleared over the session
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Seconds of fall time per row at the current speed
    pub fn falling_speed(&self) -> f64 {
        self.falling_speed
    }

    pub fn accelerate_count(&self) -> u32 {
        self.accelerate_count
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for host-side setup such as seeding garbage rows
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Copy out the render-facing state
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(self)
    }
}
