//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: no widget toolkit, just a
//! framebuffer that [`GameView`] fills from a snapshot and
//! [`TerminalRenderer`] diffs onto the terminal.
//!
//! Board cells are drawn two columns wide so the grid looks square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_size, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
