//! TUI Snake (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_snake::{types,core,engine,input,store,term}` and adds
//! the pieces only the binary needs: configuration, logging and the bell.

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_input as input;
pub use tui_snake_store as store;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub mod audio;
pub mod config;
pub mod logging;
