//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, timers, storage or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Every rule is a plain function or method
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`rules`]: bounds and body collision checks, food placement, stage lookup
//! - [`game_state`]: the snake state machine and its [`tick`](GameState::tick)
//! - [`scores`]: the top-3 high-score list
//! - [`rng`]: seeded LCG used for food placement
//! - [`snapshot`]: read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick in its current heading
//! - Heading changes are buffered and applied at the start of the next tick;
//!   reversing straight into the neck is ignored
//! - Leaving the board or running into the body ends the game
//! - Eating food scores one point and grows the snake by one segment
//! - Every five points advance the stage, up to stage 5
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, TickOutcome};
//! use tui_snake_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345);
//!
//! // The first heading starts the game.
//! game.apply_action(GameAction::SetDirection(Direction::Up));
//! assert!(game.started());
//!
//! let outcome = game.tick();
//! assert_ne!(outcome, TickOutcome::Idle);
//! ```
//!
//! # Timing
//!
//! The core has no clock. A driver calls [`GameState::tick`] once per
//! difficulty interval while the game is running.

pub mod game_state;
pub mod rng;
pub mod rules;
pub mod scores;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use game_state::{Collision, GameState, Phase, TickOutcome};
pub use rng::SimpleRng;
pub use rules::{collides_with_body, is_out_of_bounds, place_food, stage_for, stage_progress};
pub use scores::HighScores;
pub use snapshot::GameSnapshot;
