//! Game state module - manages the complete game state
//!
//! This module ties together the rules, the RNG and the high-score list. It
//! owns the snake, applies buffered input and advances the game one cell per
//! [`GameState::tick`].

use std::collections::VecDeque;

use crate::rules::{collides_with_body, is_out_of_bounds, place_food, stage_for};
use crate::scores::HighScores;
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::SimpleRng;

/// Lifecycle phase derived from the started/paused/over flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl Phase {
    pub fn from_flags(started: bool, paused: bool, game_over: bool) -> Self {
        if game_over {
            Phase::GameOver
        } else if !started {
            Phase::NotStarted
        } else if paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }
}

/// What ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// Result of a single [`GameState::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing happened.
    Idle,
    /// The snake advanced one cell.
    Moved,
    /// The snake ate and grew; new food was placed.
    Ate,
    /// The snake ate the last free cell. The game is over as a win.
    BoardFull { score: u32, rank: Option<usize> },
    /// The head hit a wall or the body.
    GameOver {
        score: u32,
        rank: Option<usize>,
        collision: Collision,
    },
}

impl TickOutcome {
    pub fn ends_game(&self) -> bool {
        matches!(self, TickOutcome::BoardFull { .. } | TickOutcome::GameOver { .. })
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board_size: i16,
    /// Head first.
    snake: VecDeque<Position>,
    /// Heading applied by the most recent tick.
    direction: Direction,
    /// Heading requested since the last tick.
    pending_direction: Option<Direction>,
    food: Option<Position>,
    score: u32,
    difficulty: Difficulty,
    high_scores: HighScores,
    rng: SimpleRng,
    /// Effects since the last drain (consumed by observers).
    effects: Vec<GameEffect>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Ticks that advanced the snake in this episode.
    tick_count: u32,
    started: bool,
    paused: bool,
    game_over: bool,
    board_full: bool,
}

impl GameState {
    /// Create a new game on the standard board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board_size(seed, BOARD_SIZE)
    }

    /// Create a new game on a custom square board
    pub fn with_board_size(seed: u32, board_size: i16) -> Self {
        let board_size = board_size.max(1);
        let mut state = Self {
            board_size,
            snake: VecDeque::new(),
            direction: INITIAL_DIRECTION,
            pending_direction: None,
            food: None,
            score: 0,
            difficulty: Difficulty::default(),
            high_scores: HighScores::new(),
            rng: SimpleRng::new(seed),
            effects: Vec::new(),
            episode_id: 0,
            tick_count: 0,
            started: false,
            paused: false,
            game_over: false,
            board_full: false,
        };
        state.reset_board();
        state
    }

    /// Builder-style setter for the loaded high-score list
    pub fn with_high_scores(mut self, high_scores: HighScores) -> Self {
        self.high_scores = high_scores;
        self
    }

    /// Builder-style setter for the starting difficulty
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    fn reset_board(&mut self) {
        let centre = self.board_size / 2;
        self.snake.clear();
        self.snake.push_back(Position::new(centre, centre));
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = None;
        self.food = place_food(&self.snake, self.board_size, &mut self.rng);
        self.score = 0;
        self.tick_count = 0;
        self.started = false;
        self.paused = false;
        self.game_over = false;
        // A one-cell board has no room for food.
        self.board_full = self.food.is_none();
    }

    /// Replace snake, heading and food.
    ///
    /// Used to set up scenarios (tests, benchmarks, demos). Pending input is
    /// dropped; flags and score are left alone. An empty `snake` is ignored.
    pub fn set_layout(&mut self, snake: &[Position], direction: Direction, food: Option<Position>) {
        if snake.is_empty() {
            return;
        }
        self.snake = snake.iter().copied().collect();
        self.direction = direction;
        self.pending_direction = None;
        self.food = food;
    }

    pub fn phase(&self) -> Phase {
        Phase::from_flags(self.started, self.paused, self.game_over)
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board_full(&self) -> bool {
        self.board_full
    }

    pub fn board_size(&self) -> i16 {
        self.board_size
    }

    pub fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn stage(&self) -> Stage {
        stage_for(self.score)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn interval_ms(&self) -> u32 {
        self.difficulty.interval_ms()
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake.extend(self.snake.iter().copied());
        out.food = self.food;
        out.direction = self.direction;
        out.board_size = self.board_size;
        out.score = self.score;
        out.stage = self.stage();
        out.difficulty = self.difficulty;
        out.interval_ms = self.interval_ms();
        out.started = self.started;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.board_full = self.board_full;
        out.high_scores = self.high_scores;
        out.episode_id = self.episode_id;
        out.tick_count = self.tick_count;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Start the game without changing heading
    pub fn start(&mut self) -> bool {
        if self.started || self.game_over {
            return false;
        }
        self.started = true;
        true
    }

    /// Buffer a heading for the next tick.
    ///
    /// The first directional input also starts the game. A heading opposite to
    /// the one applied by the last tick is ignored. Returns whether anything
    /// changed: an accepted heading, or a start triggered by a rejected one.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.game_over || self.paused {
            return false;
        }
        let started = self.start();

        if direction.is_opposite(self.direction) {
            return started;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Toggle pause; no-op before start and after game over
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Reset snake, food, score and flags. High scores and difficulty survive.
    pub fn restart(&mut self) {
        self.reset_board();
        self.effects.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Returns whether the difficulty changed
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.difficulty == difficulty {
            return false;
        }
        self.difficulty = difficulty;
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::SetDirection(direction) => self.set_direction(direction),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Start => self.start(),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::SetDifficulty(difficulty) => self.set_difficulty(difficulty),
            GameAction::CycleDifficulty => self.set_difficulty(self.difficulty.next()),
        }
    }

    /// Take and clear the effects emitted since the last call.
    pub fn take_effects(&mut self) -> Vec<GameEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Advance the snake by one cell
    ///
    /// Collisions are checked against the whole current body, including the
    /// tail cell that would move away this tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase() != Phase::Running {
            return TickOutcome::Idle;
        }
        if self.board_full {
            let rank = self.record_game_over();
            return TickOutcome::BoardFull {
                score: self.score,
                rank,
            };
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        self.tick_count = self.tick_count.wrapping_add(1);

        let new_head = self.head().step(self.direction);

        if is_out_of_bounds(new_head, self.board_size) {
            return self.end_game(Collision::Wall);
        }
        if collides_with_body(new_head, &self.snake) {
            return self.end_game(Collision::Body);
        }

        if self.food == Some(new_head) {
            self.effects.push(GameEffect::Eat);
            self.score += 1;
            self.snake.push_front(new_head);
            self.food = place_food(&self.snake, self.board_size, &mut self.rng);

            if self.food.is_none() {
                self.board_full = true;
                let rank = self.record_game_over();
                return TickOutcome::BoardFull {
                    score: self.score,
                    rank,
                };
            }
            return TickOutcome::Ate;
        }

        self.snake.push_front(new_head);
        self.snake.pop_back();
        TickOutcome::Moved
    }

    fn end_game(&mut self, collision: Collision) -> TickOutcome {
        let rank = self.record_game_over();
        TickOutcome::GameOver {
            score: self.score,
            rank,
            collision,
        }
    }

    fn record_game_over(&mut self) -> Option<usize> {
        self.game_over = true;
        self.pending_direction = None;
        self.effects.push(GameEffect::GameOver);
        self.high_scores.insert(self.score)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
