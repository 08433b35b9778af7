use crate::game_state::Phase;
use crate::rules::stage_for;
use crate::scores::HighScores;
use crate::types::{Difficulty, Direction, Position, Stage, BOARD_SIZE, INITIAL_DIRECTION};

/// Read-only copy of everything the presentation layer draws.
///
/// Produced by [`GameState::snapshot_into`](crate::GameState::snapshot_into);
/// the snake buffer is reused across frames.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Snake segments, head first.
    pub snake: Vec<Position>,
    /// `None` once the snake fills the board.
    pub food: Option<Position>,
    pub direction: Direction,
    pub board_size: i16,
    pub score: u32,
    pub stage: Stage,
    pub difficulty: Difficulty,
    pub interval_ms: u32,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    pub board_full: bool,
    pub high_scores: HighScores,
    pub episode_id: u32,
    pub tick_count: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.snake.clear();
        self.food = None;
        self.direction = INITIAL_DIRECTION;
        self.board_size = BOARD_SIZE;
        self.score = 0;
        self.stage = stage_for(0);
        self.difficulty = Difficulty::default();
        self.interval_ms = self.difficulty.interval_ms();
        self.started = false;
        self.paused = false;
        self.game_over = false;
        self.board_full = false;
        self.high_scores = HighScores::new();
        self.episode_id = 0;
        self.tick_count = 0;
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }

    pub fn phase(&self) -> Phase {
        Phase::from_flags(self.started, self.paused, self.game_over)
    }

    pub fn playable(&self) -> bool {
        self.phase() == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            snake: Vec::new(),
            food: None,
            direction: INITIAL_DIRECTION,
            board_size: BOARD_SIZE,
            score: 0,
            stage: stage_for(0),
            difficulty: Difficulty::default(),
            interval_ms: 0,
            started: false,
            paused: false,
            game_over: false,
            board_full: false,
            high_scores: HighScores::new(),
            episode_id: 0,
            tick_count: 0,
        };
        s.clear();
        s
    }
}
