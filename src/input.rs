//! UI-agnostic key handling for the game screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Actions the player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// "Buy": start a new game
    Start,
    /// "Sell": stop the running game early
    Stop,
    /// Switch between the absolute and percentage presets
    TogglePolicy,
    /// Leave the program
    Quit,
    /// Any other key
    Other,
}

pub fn map_key(key: KeyEvent) -> GameInput {
    // Windows terminals also report releases
    if key.kind == KeyEventKind::Release {
        return GameInput::Other;
    }
    match key.code {
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Enter => GameInput::Start,
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char(' ') => GameInput::Stop,
        KeyCode::Char('p') | KeyCode::Char('P') => GameInput::TogglePolicy,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}
