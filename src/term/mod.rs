//! Terminal rendering layer.
//!
//! The view renders game state into a plain framebuffer of styled
//! character cells; the renderer flushes framebuffers to the terminal.
//! Keeping the two apart leaves the view pure and unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
