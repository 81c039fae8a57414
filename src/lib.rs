//! Blockfall: a minimal falling-block puzzle game for the terminal.
//!
//! The crate splits into three layers:
//! - [`core`]: pure game rules (grid, shapes, collision, placement, scoring)
//! - [`input`]: key-event to action mapping
//! - [`term`]: framebuffer game view and terminal renderer

pub mod core;
pub mod input;
pub mod term;
pub mod types;
