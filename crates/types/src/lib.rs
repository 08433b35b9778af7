//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board
//!
//! The playfield is a square grid:
//!
//! - **Size**: 20x20 cells (indexed 0-19 on both axes)
//! - **Initial snake**: a single segment in the centre cell (10, 10) heading right
//!
//! # Tick Intervals
//!
//! The snake advances one cell per tick. The tick interval depends on difficulty:
//!
//! | Difficulty | Interval |
//! |------------|----------|
//! | Easy | 200ms |
//! | Medium | 150ms |
//! | Hard | 100ms |
//! | Extreme | 70ms |
//!
//! # Stages
//!
//! Stages are a pure function of score:
//!
//! | Stage | Reached at |
//! |-------|------------|
//! | 1 | 0 |
//! | 2 | 5 |
//! | 3 | 10 |
//! | 4 | 15 |
//! | 5 | 20 |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Difficulty, Direction, Position, BOARD_SIZE};
//!
//! let head = Position::new(10, 10);
//! assert_eq!(head.step(Direction::Right), Position::new(11, 10));
//!
//! assert!(Direction::Up.is_opposite(Direction::Down));
//! assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
//! assert_eq!(Difficulty::Extreme.interval_ms(), 70);
//!
//! assert_eq!(BOARD_SIZE, 20);
//! ```

/// Board width and height in cells (20x20)
pub const BOARD_SIZE: i16 = 20;

/// Heading of a freshly started snake
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Number of entries kept in the high-score list
pub const HIGH_SCORE_COUNT: usize = 3;

/// Random samples tried before food placement falls back to scanning free cells
pub const FOOD_PLACEMENT_ATTEMPTS: u32 = 256;

/// Stage table as `(stage, score needed to reach it)`, ascending.
pub const STAGES: [(u32, u32); 5] = [(1, 0), (2, 5), (3, 10), (4, 15), (5, 20)];


/// A cell coordinate on the board.
///
/// Coordinates are signed so that a step off the edge is representable; that
/// is how wall collisions are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The four headings the snake can move in
///
/// Screen coordinates: `y` grows downwards, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit grid offset `(dx, dy)`
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Named speed tier selecting the tick interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    /// Milliseconds between two ticks at this difficulty
    pub fn interval_ms(&self) -> u32 {
        match self {
            Difficulty::Easy => 200,
            Difficulty::Medium => 150,
            Difficulty::Hard => 100,
            Difficulty::Extreme => 70,
        }
    }

    /// The next tier, wrapping from `Extreme` back to `Easy`
    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Extreme,
            Difficulty::Extreme => Difficulty::Easy,
        }
    }

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("EASY"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("extreme"), Some(Difficulty::Extreme));
    /// assert_eq!(Difficulty::from_str("insane"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "extreme" => Some(Difficulty::Extreme),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
            Difficulty::Extreme => "EXTREME",
        }
    }
}

/// Score-derived tier
///
/// `required_score` is the score needed for the next stage, or the final
/// stage's own threshold once the last tier is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stage {
    pub stage: u32,
    pub required_score: u32,
}

/// Game actions that can be applied to modify game state
///
/// These are produced by the input layer (keys and swipes) and consumed by
/// the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a heading for the next tick (also starts a fresh game)
    SetDirection(Direction),
    /// Toggle pause (no-op before start or after game over)
    TogglePause,
    /// Start the game without changing heading (first swipe/touch)
    Start,
    /// Reset snake, food, score and flags; keeps high scores
    Restart,
    /// Select a speed tier
    SetDifficulty(Difficulty),
    /// Move to the next speed tier
    CycleDifficulty,
}

/// Discrete effects emitted by the game for an external player (sound)
///
/// Fire-and-forget: nothing is acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEffect {
    Eat,
    GameOver,
}

impl GameEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEffect::Eat => "eat",
            GameEffect::GameOver => "game-over",
        }
    }
}
