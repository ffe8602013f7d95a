//! Session tests - command queue ordering and the drop timer

use tui_blocks::core::{spawn_origin, GameController, GameStatus, Session};
use tui_blocks::types::{Color, Command, FIELD_HEIGHT, FIELD_WIDTH};

const INTERVAL: u64 = 1000;

fn running_session() -> Session {
    let mut session = Session::new(GameController::new(12345), INTERVAL);
    session.push(Command::Start);
    session.run_pending(0);
    session
}

fn block_y(session: &Session) -> i32 {
    session.controller().block().map(|b| b.origin().1).unwrap()
}

#[test]
fn test_timer_drops_block_once_per_interval() {
    let mut session = running_session();
    assert_eq!(session.time_until_drop(0), Some(INTERVAL));

    assert_eq!(session.run_pending(INTERVAL - 1), 0);
    assert_eq!(block_y(&session), 0);

    assert_eq!(session.run_pending(INTERVAL), 1);
    assert_eq!(block_y(&session), 1);
    assert_eq!(session.time_until_drop(INTERVAL), Some(INTERVAL));

    // Running again at the same instant must not step twice.
    assert_eq!(session.run_pending(INTERVAL), 0);
    assert_eq!(block_y(&session), 1);
}

#[test]
fn test_manual_drop_restarts_timer() {
    let mut session = running_session();

    session.push(Command::MoveDown);
    session.run_pending(600);
    assert_eq!(block_y(&session), 1);
    assert_eq!(session.time_until_drop(600), Some(INTERVAL));

    // The original deadline has passed without a second step.
    assert_eq!(session.run_pending(INTERVAL), 0);
    assert_eq!(block_y(&session), 1);

    session.run_pending(1600);
    assert_eq!(block_y(&session), 2);
}

#[test]
fn test_sideways_moves_leave_timer_alone() {
    let mut session = running_session();

    session.push(Command::MoveLeft);
    session.push(Command::Rotate);
    session.run_pending(500);
    assert_eq!(session.time_until_drop(500), Some(INTERVAL - 500));
}

#[test]
fn test_commands_apply_in_order() {
    let mut session = Session::new(GameController::new(12345), INTERVAL);
    session.push(Command::Start);
    session.push(Command::MoveLeft);
    session.push(Command::MoveLeft);
    assert_eq!(session.pending(), 3);

    assert_eq!(session.run_pending(0), 3);
    assert_eq!(session.pending(), 0);

    let block = session.controller().block().unwrap();
    let spawn_x = spawn_origin(block.kind(), FIELD_WIDTH).0;
    assert_eq!(block.origin().0, spawn_x - 2);
}

#[test]
fn test_movement_ignored_before_start() {
    let mut session = Session::new(GameController::new(1), INTERVAL);
    session.push(Command::MoveDown);
    session.push(Command::MoveLeft);
    session.run_pending(0);

    assert_eq!(session.controller().status(), GameStatus::Idle);
    assert!(session.controller().block().is_none());
    assert_eq!(session.time_until_drop(0), None);
}

#[test]
fn test_game_over_cancels_timer() {
    let mut session = running_session();

    // Fill everything below row 0 except one column, so nothing clears.
    let field = session.controller_mut().field_mut();
    for y in 1..i32::from(FIELD_HEIGHT) {
        for x in 1..i32::from(FIELD_WIDTH) {
            field.set(x, y, Color::Red);
        }
    }

    session.push(Command::MoveDown);
    session.run_pending(10);

    assert_eq!(session.controller().status(), GameStatus::GameOver);
    assert_eq!(session.time_until_drop(10), None);
    assert_eq!(session.run_pending(100_000), 0);

    // Start brings the timer back.
    session.push(Command::Start);
    session.run_pending(200_000);
    assert_eq!(session.controller().status(), GameStatus::Running);
    assert_eq!(session.time_until_drop(200_000), Some(INTERVAL));
}

#[test]
fn test_quit_stops_the_session() {
    let mut session = running_session();
    session.push(Command::Quit);
    session.run_pending(5);

    assert!(session.quit_requested());
    assert_eq!(session.time_until_drop(5), None);
}
