//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and turns mouse
//! drags into swipe gestures, so the game can be steered like on a touch screen.

pub mod map;
pub mod swipe;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit, swipe_actions};
pub use swipe::{classify_swipe, SwipeTracker, DEFAULT_DEAD_ZONE};
