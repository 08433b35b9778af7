//! Rules module - pure geometry and progression helpers
//!
//! Everything here is a pure function of its arguments (plus the RNG for food
//! placement). The game state machine is built on top of these.

use crate::rng::SimpleRng;
use crate::types::{Position, Stage, FOOD_PLACEMENT_ATTEMPTS, STAGES};

/// True iff `pos` lies outside a `board_size` x `board_size` grid.
pub fn is_out_of_bounds(pos: Position, board_size: i16) -> bool {
    pos.x < 0 || pos.x >= board_size || pos.y < 0 || pos.y >= board_size
}

/// True iff `head` matches any segment of `body` exactly.
pub fn collides_with_body<'a, I>(head: Position, body: I) -> bool
where
    I: IntoIterator<Item = &'a Position>,
{
    body.into_iter().any(|segment| *segment == head)
}

/// Pick a random free cell for the next food item.
///
/// Samples uniformly until a cell not covered by the snake comes up. After
/// [`FOOD_PLACEMENT_ATTEMPTS`] misses the free cells are enumerated and one is
/// chosen uniformly, so a nearly full board still terminates quickly.
///
/// Returns `None` only when the snake covers every cell.
pub fn place_food<'a, I>(snake: I, board_size: i16, rng: &mut SimpleRng) -> Option<Position>
where
    I: IntoIterator<Item = &'a Position> + Copy,
{
    if board_size <= 0 {
        return None;
    }
    let size = board_size as u32;

    for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
        let candidate = Position::new(rng.next_range(size) as i16, rng.next_range(size) as i16);
        if !collides_with_body(candidate, snake) {
            return Some(candidate);
        }
    }

    let side = board_size as usize;
    let mut occupied = vec![false; side * side];
    for segment in snake {
        if !is_out_of_bounds(*segment, board_size) {
            occupied[segment.y as usize * side + segment.x as usize] = true;
        }
    }

    let free = occupied.iter().filter(|&&o| !o).count();
    if free == 0 {
        return None;
    }

    let pick = rng.next_range(free as u32) as usize;
    occupied
        .iter()
        .enumerate()
        .filter(|&(_, &o)| !o)
        .nth(pick)
        .map(|(i, _)| Position::new((i % side) as i16, (i / side) as i16))
}

/// Stage reached at `score`, paired with the score needed for the next one.
///
/// Past the final tier, `required_score` stays pinned at the final threshold.
///
/// # Examples
///
/// ```
/// use tui_snake_core::rules::stage_for;
///
/// assert_eq!(stage_for(0).stage, 1);
/// assert_eq!(stage_for(0).required_score, 5);
/// assert_eq!(stage_for(25).stage, 5);
/// assert_eq!(stage_for(25).required_score, 20);
/// ```
pub fn stage_for(score: u32) -> Stage {
    let (first_stage, _) = STAGES[0];
    let (_, last_threshold) = STAGES[STAGES.len() - 1];

    let stage = STAGES
        .iter()
        .rev()
        .find(|&&(_, threshold)| score >= threshold)
        .map(|&(stage, _)| stage)
        .unwrap_or(first_stage);

    let required_score = STAGES
        .iter()
        .find(|&&(_, threshold)| threshold > score)
        .map(|&(_, threshold)| threshold)
        .unwrap_or(last_threshold);

    Stage {
        stage,
        required_score,
    }
}

/// Fraction of the way to `required_score`, clamped to `[0, 1]`.
///
/// Drives the scoreboard's progress bar.
pub fn stage_progress(score: u32) -> f32 {
    let stage = stage_for(score);
    if stage.required_score == 0 {
        return 1.0;
    }
    (score as f32 / stage.required_score as f32).clamp(0.0, 1.0)
}
