//! Core types shared across the application.
//! Pure data with no external dependencies.

/// Default board dimensions (columns x rows)
pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 20;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const DROP_INTERVAL_MS: u32 = 500;

/// Points awarded per cleared row
pub const LINE_SCORE: u32 = 10;

/// A board cell: `false` is empty, `true` is settled piece material.
pub type Cell = bool;

/// Movement intents accepted by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
}

/// Game lifecycle. `GameOver` suspends ticks and movement until the
/// player acknowledges it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}
