//! Subscribers notified after every state change.

use crate::core::GameSnapshot;
use crate::types::GameEffect;

/// Receives effects and the new snapshot after each tick or accepted action.
///
/// Effects arrive first, in emission order, followed by one `on_update`.
pub trait GameObserver {
    fn on_effect(&mut self, _effect: GameEffect) {}

    fn on_update(&mut self, _snapshot: &GameSnapshot) {}
}
