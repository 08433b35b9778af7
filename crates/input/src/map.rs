//! Key mapping from terminal events to game actions.

use crate::types::{Difficulty, Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::SetDirection(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::SetDirection(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::SetDirection(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::SetDirection(Direction::Right))
        }

        // Flow
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::TogglePause),
        KeyCode::Enter => Some(GameAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        // Difficulty
        KeyCode::Char('1') => Some(GameAction::SetDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(GameAction::SetDifficulty(Difficulty::Medium)),
        KeyCode::Char('3') => Some(GameAction::SetDifficulty(Difficulty::Hard)),
        KeyCode::Char('4') => Some(GameAction::SetDifficulty(Difficulty::Extreme)),
        KeyCode::Tab => Some(GameAction::CycleDifficulty),

        _ => None,
    }
}

/// Actions for a recognised swipe: start the game, then steer.
pub fn swipe_actions(direction: Direction) -> [GameAction; 2] {
    [GameAction::Start, GameAction::SetDirection(direction)]
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
