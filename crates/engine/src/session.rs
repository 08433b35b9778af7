//! Game session: state machine + score store + observers + tick timer.
//!
//! This is the single owner of a play session. Input handlers call
//! [`GameSession::apply_action`]; the event loop calls [`GameSession::poll`].
//! Both run on the same thread, so a tick is never observed half-applied.

use std::time::{Duration, Instant};

use crate::core::{GameSnapshot, GameState, HighScores, Phase, TickOutcome};
use crate::observer::GameObserver;
use crate::store::ScoreStore;
use crate::timer::TickTimer;
use crate::types::GameAction;

pub struct GameSession<S: ScoreStore> {
    state: GameState,
    store: S,
    timer: TickTimer,
    observers: Vec<Box<dyn GameObserver>>,
    snapshot: GameSnapshot,
}

impl<S: ScoreStore> GameSession<S> {
    /// Build a session, replacing the state's high scores with the stored ones.
    ///
    /// Unreadable or malformed stored scores fall back to an empty list.
    pub fn new(state: GameState, store: S) -> Self {
        let high_scores = load_high_scores(&store);
        let state = state.with_high_scores(high_scores);

        let mut snapshot = GameSnapshot::default();
        state.snapshot_into(&mut snapshot);

        tracing::info!(
            best = high_scores.best(),
            difficulty = state.difficulty().as_str(),
            "session created"
        );

        Self {
            state,
            store,
            timer: TickTimer::new(),
            observers: Vec::new(),
            snapshot,
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    /// Latest snapshot, refreshed after every change.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Apply an input action and keep the timer in step with the new phase.
    ///
    /// Returns whether the action changed anything.
    pub fn apply_action(&mut self, action: GameAction, now: Instant) -> bool {
        let changed = self.state.apply_action(action);
        if changed {
            tracing::debug!(?action, phase = ?self.state.phase(), "action applied");
            self.notify();
        }
        self.sync_timer(now);
        changed
    }

    /// Tick the game if the timer is due.
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.timer.poll(now) {
            return None;
        }
        Some(self.tick(now))
    }

    /// Advance one step regardless of the timer, then resync the timer.
    ///
    /// A no-op unless the game is running.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let outcome = self.state.tick();
        match outcome {
            TickOutcome::Idle => return outcome,
            TickOutcome::GameOver {
                score,
                rank,
                collision,
            } => {
                tracing::info!(score, ?rank, ?collision, "game over");
                self.persist_high_scores();
            }
            TickOutcome::BoardFull { score, rank } => {
                tracing::info!(score, ?rank, "board cleared");
                self.persist_high_scores();
            }
            TickOutcome::Ate => {
                tracing::debug!(score = self.state.score(), "food eaten");
            }
            TickOutcome::Moved => {}
        }
        self.notify();
        self.sync_timer(now);
        outcome
    }

    /// Arm the timer iff the game is running; re-arm on interval change.
    pub fn sync_timer(&mut self, now: Instant) {
        if self.state.phase() == Phase::Running {
            let interval = Duration::from_millis(self.state.interval_ms() as u64);
            if self.timer.interval() != Some(interval) {
                tracing::debug!(interval_ms = self.state.interval_ms(), "tick timer armed");
                self.timer.arm(now, interval);
            }
        } else if self.timer.is_armed() {
            tracing::debug!(phase = ?self.state.phase(), "tick timer canceled");
            self.timer.cancel();
        }
    }

    /// How long the event loop may wait for input before the next tick.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_next(now)
    }

    /// Stop ticking for good; call before tearing the session down.
    pub fn shutdown(&mut self) {
        self.timer.cancel();
        tracing::info!(episode = self.state.episode_id(), "session shut down");
    }

    fn persist_high_scores(&mut self) {
        let scores = *self.state.high_scores();
        if let Err(e) = self.store.save(scores.as_slice()) {
            tracing::warn!("failed to save high scores: {e:#}");
        }
    }

    fn notify(&mut self) {
        let effects = self.state.take_effects();
        self.state.snapshot_into(&mut self.snapshot);

        for observer in self.observers.iter_mut() {
            for effect in &effects {
                observer.on_effect(*effect);
            }
            observer.on_update(&self.snapshot);
        }
    }
}

/// Read the stored list, treating any failure as an empty list.
pub fn load_high_scores<S: ScoreStore + ?Sized>(store: &S) -> HighScores {
    match store.load() {
        Ok(values) => HighScores::from_slice(&values),
        Err(e) => {
            tracing::warn!("ignoring unreadable high scores: {e:#}");
            HighScores::new()
        }
    }
}
