//! Session layer on top of the pure core.
//!
//! - [`timer`]: cooperative repeating tick timer (armed only while running)
//! - [`store`]: the injected high-score persistence interface
//! - [`observer`]: subscribers notified with effects and snapshots
//! - [`session`]: [`GameSession`], which owns all of the above for one play session

pub mod observer;
pub mod session;
pub mod store;
pub mod timer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use observer::GameObserver;
pub use session::{load_high_scores, GameSession};
pub use store::{MemoryStore, ScoreStore};
pub use timer::TickTimer;
