//! Core module - pure game logic with no external dependencies
//!
//! All game rules live here: the grid, the piece catalog, collision,
//! placement, line clears and the running/over phase machine. Zero
//! dependencies on UI or I/O, deterministic under a fixed RNG seed.

pub mod config;
pub mod game;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod shape;

pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use grid::Grid;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use shape::{Shape, CATALOG};
