//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game command. Unmapped keys yield nothing.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(Command::SoftDrop),
        KeyCode::Up | KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Rotate),
        KeyCode::Char(' ') => Some(Command::HardDrop),

        // Moves the piece up; kept for poking at the rules by hand.
        KeyCode::Char('k') | KeyCode::Char('K') => Some(Command::DebugUp),

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),

        _ => None,
    }
}
