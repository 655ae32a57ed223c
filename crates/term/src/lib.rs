//! Terminal rendering for blockfall.
//!
//! A small, game-oriented rendering layer. Frames are drawn into a
//! framebuffer of styled cells and flushed to the terminal with crossterm,
//! re-emitting only what changed since the previous frame.
//!
//! Blocks are 2 columns wide and 1 row tall to compensate for the usual
//! terminal glyph aspect ratio.

pub mod canvas;
pub mod fb;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use canvas::{BoardSurface, TerminalCanvas, HUD_ROWS};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
