//! Sound effects as terminal bells.

use std::io::{self, Write};

use crate::engine::GameObserver;
use crate::types::GameEffect;

/// Rings the bell once for food and twice for game over.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

fn bell_for(effect: GameEffect) -> &'static [u8] {
    match effect {
        GameEffect::Eat => b"\x07",
        GameEffect::GameOver => b"\x07\x07",
    }
}

impl<W: Write> GameObserver for TerminalBell<W> {
    fn on_effect(&mut self, effect: GameEffect) {
        // Fire and forget.
        let result = self
            .out
            .write_all(bell_for(effect))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::debug!(effect = effect.as_str(), "bell failed: {}", e);
        }
    }
}
