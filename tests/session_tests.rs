//! Session tests - gravity gating, scoring flow and game over

use tetris_engine::core::{Piece, Shape, ShapeKind, Texture, TextureContent};
use tetris_engine::types::{Factor, Position, Vector};
use tetris_engine::{AcceleratorKind, EngineError, Session, SessionConfig};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{} != {}",
        actual,
        expected
    );
}

fn config() -> SessionConfig {
    SessionConfig {
        n_rows: 10,
        n_cols: 10,
        seed: Some(1),
        ..SessionConfig::default()
    }
}

fn session() -> Session {
    Session::new(config()).unwrap()
}

fn fill_row_except_last(session: &mut Session, y: i32) {
    for x in 0..9 {
        session
            .board_mut()
            .grid_mut()
            .set(Position::new(x, y), Texture::new(TextureContent::Green))
            .unwrap();
    }
}

/// Vertical I piece occupying column x+2, rows y..y+4
fn i_column(x: i32, y: i32) -> Piece {
    Piece::new(
        Position::new(x, y),
        Shape::new(ShapeKind::I, 1),
        Texture::new(TextureContent::Blue),
    )
}

#[test]
fn test_new_session_state() {
    let session = session();

    assert_eq!(session.score(), 0);
    assert_eq!(session.level(), 1);
    assert_eq!(session.lines(), 0);
    assert!(!session.game_over());
    // speed(1, {a: 1.0, b: 0.05})
    assert_close(session.falling_speed(), 0.95);
}

#[test]
fn test_new_rejects_invalid_config() {
    let result = Session::new(SessionConfig {
        n_rows: 3,
        ..config()
    });

    assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
}

#[test]
fn test_gravity_waits_for_the_fall_interval() {
    let mut session = session();
    let start = session.board().piece().anchor();

    // 0.5s elapsed, below the 0.95s interval: nothing moves
    let report = session.step(0.5, Vector::ZERO).unwrap();
    assert!(!report.moved);
    assert_eq!(session.board().piece().anchor(), start);

    // Accumulated 1.0s crosses the interval: one row down
    let report = session.step(0.5, Vector::ZERO).unwrap();
    assert!(report.moved);
    assert_eq!(session.board().piece().anchor(), start + Vector::DOWN);
}

#[test]
fn test_input_moves_between_gravity_steps() {
    let mut session = session();
    let start = session.board().piece().anchor();

    let report = session.step(0.0, Vector::RIGHT).unwrap();

    assert!(report.moved);
    assert_eq!(session.board().piece().anchor(), start + Vector::RIGHT);
}

#[test]
fn test_lock_scores_a_single_line() {
    let mut session = session();
    fill_row_except_last(&mut session, 9);
    session.board_mut().set_piece(i_column(7, 6));

    let report = session.step(1.0, Vector::ZERO).unwrap();

    assert!(report.locked);
    assert!(!report.moved);
    assert_eq!(report.lines_cleared, 1);
    assert!(!report.leveled_up);
    assert_eq!(session.score(), 40);
    assert_eq!(session.lines(), 1);
    assert_eq!(session.level(), 1);
    // The next piece entered play at the spawn anchor
    assert_eq!(session.board().piece().anchor(), Position::new(5, -2));
}

#[test]
fn test_tetris_upgrades_the_level() {
    let mut session = session();
    for y in 6..10 {
        fill_row_except_last(&mut session, y);
    }
    session.board_mut().set_piece(i_column(7, 6));

    let report = session.step(1.0, Vector::ZERO).unwrap();

    assert_eq!(report.lines_cleared, 4);
    assert!(report.leveled_up);
    assert_eq!(session.score(), 1200);
    assert_eq!(session.level(), 13);
    // Falling speed adopted the new level: 1.0 - 13 * 0.05
    assert_close(session.falling_speed(), 0.35);
}

#[test]
fn test_stack_reaching_the_roof_ends_the_game() {
    let mut session = session();
    for x in 0..10 {
        session
            .board_mut()
            .grid_mut()
            .set(Position::new(x, 1), Texture::new(TextureContent::Green))
            .unwrap();
    }
    // O piece straddling the top edge, resting on the filled row
    session.board_mut().set_piece(Piece::new(
        Position::new(5, -1),
        Shape::new(ShapeKind::O, 0),
        Texture::new(TextureContent::Red),
    ));

    let report = session.step(1.0, Vector::ZERO).unwrap();

    assert!(report.game_over);
    assert!(!report.locked);
    assert!(session.game_over());
    // The overflowing piece was never locked
    assert!(!session.board().grid().is_occupied(Position::new(6, 0)));
    assert_eq!(session.score(), 0);
}

#[test]
fn test_steps_after_game_over_are_inert() {
    let mut session = session();
    for x in 0..10 {
        session
            .board_mut()
            .grid_mut()
            .set(Position::new(x, 1), Texture::new(TextureContent::Green))
            .unwrap();
    }
    session.board_mut().set_piece(Piece::new(
        Position::new(5, -1),
        Shape::new(ShapeKind::O, 0),
        Texture::new(TextureContent::Red),
    ));
    session.step(1.0, Vector::ZERO).unwrap();
    assert!(session.game_over());
    let anchor = session.board().piece().anchor();

    let report = session.step(5.0, Vector::DOWN).unwrap();

    assert!(report.game_over);
    assert!(!report.moved);
    assert_eq!(session.board().piece().anchor(), anchor);
}

#[test]
fn test_accelerate_applies_the_linear_curve() {
    let mut session = Session::new(SessionConfig {
        accelerator_factor: Factor::new(0.005, 0.0, 0.0),
        ..config()
    })
    .unwrap();

    // Count 0 leaves the speed untouched, then each step subtracts a*count
    session.accelerate();
    assert_close(session.falling_speed(), 0.95);
    session.accelerate();
    assert_close(session.falling_speed(), 0.945);
    assert_eq!(session.accelerate_count(), 2);

    session.reset_falling_speed();
    assert_close(session.falling_speed(), 0.95);
}

#[test]
fn test_accelerate_applies_the_nonlinear_curve() {
    let mut session = Session::new(SessionConfig {
        accelerator: AcceleratorKind::NonLinear,
        accelerator_factor: Factor::new(0.005, 2.0, 0.0),
        ..config()
    })
    .unwrap();

    session.accelerate();
    session.accelerate();
    assert_close(session.falling_speed(), 0.945);
    // count^2 kicks in from the third step
    session.accelerate();
    assert_close(session.falling_speed(), 0.925);
}

#[test]
fn test_reset_restores_a_fresh_session() {
    let mut session = session();
    fill_row_except_last(&mut session, 9);
    session.board_mut().set_piece(i_column(7, 6));
    session.step(1.0, Vector::ZERO).unwrap();
    assert_eq!(session.score(), 40);

    session.reset();

    assert_eq!(session.score(), 0);
    assert_eq!(session.lines(), 0);
    assert_eq!(session.level(), 1);
    assert_eq!(session.accelerate_count(), 0);
    assert!(!session.game_over());
    assert_close(session.falling_speed(), 0.95);
    assert!(session.board().grid().iter().all(|(_, cell)| cell.is_none()));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = SessionConfig {
        n_rows: 16,
        n_cols: 12,
        init_level: 3,
        accelerator: AcceleratorKind::NonLinear,
        accelerator_factor: Factor::new(0.005, 2.0, 0.0),
        seed: Some(99),
        ..SessionConfig::default()
    };

    let json = serde_json::to_string(&config).unwrap();
    let parsed: SessionConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_partial_config_json_uses_defaults() {
    let parsed: SessionConfig = serde_json::from_str(r#"{"accelerator":"nonlinear"}"#).unwrap();

    assert_eq!(parsed.accelerator, AcceleratorKind::NonLinear);
    assert_eq!(parsed.n_rows, 10);
    assert_eq!(parsed.n_cols, 20);
    assert_eq!(parsed.seed, None);
}

#[test]
fn test_snapshot_copies_render_state() {
    let session = session();

    let snapshot = session.snapshot();

    assert_eq!(snapshot.score, session.score());
    assert_eq!(snapshot.level, session.level());
    assert_eq!(snapshot.game_over, session.game_over());
    assert_eq!(snapshot.piece.cells, session.board().piece().cells());
    assert_eq!(snapshot.piece.kind, session.board().piece().shape().kind());
    assert_eq!(
        snapshot.piece.rgb,
        session.board().piece().texture().rgb()
    );
    assert_eq!(
        snapshot.next_piece.anchor,
        session.board().next_piece().anchor()
    );
}
