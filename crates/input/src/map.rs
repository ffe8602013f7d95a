//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key to a command.
///
/// Arrows, vi keys (`h j k l`) and WASD all move; Enter, Space or `n`
/// starts a game; `q` or Ctrl-C quits.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Command::MoveDown),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Command::Rotate),

        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => Some(Command::Start),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),

        _ => None,
    }
}

/// Whether an event should be acted on.
///
/// Terminals that report releases would otherwise double every key; repeats
/// are kept so a held arrow keeps moving.
pub fn is_press(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}
