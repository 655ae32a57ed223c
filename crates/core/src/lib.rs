//! Core game logic - pure, deterministic, and testable
//!
//! All game rules and the per-frame simulation live here, with no UI, timing
//! source or I/O. The frame loop feeds [`GameState::step`] an elapsed time and
//! an input snapshot, then asks [`GameState::render`] to draw onto a
//! [`Surface`].
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 cell matrix with row-full checks and line clearing
//! - [`shape`]: the 7 tetromino occupancy matrices and matrix rotation
//! - [`piece`]: the active piece (shape, color, position)
//! - [`spawner`]: uniform random shape and color draws
//! - [`collision`]: piece-vs-grid collision and merge
//! - [`scoring`]: 100 points per cleared row
//! - [`game`]: the session state machine
//! - [`surface`]: the drawing seam
//!
//! # Rules
//!
//! - No wall kicks: a rotation or move that collides is undone
//! - One input action per frame, by priority: left, right, soft drop, rotate
//! - Gravity drops the piece a row once the fall timer exceeds the interval
//! - A piece that cannot fall locks; full rows clear; the next piece spawns
//! - The game ends when a freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use blockfall_core::{DrawList, GameState};
//! use blockfall_types::{GameConfig, InputAction, InputState};
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(12345));
//! let x = game.piece().x;
//!
//! game.step(16, &InputState::empty().with(InputAction::MoveLeft));
//! assert_eq!(game.piece().x, x - 1);
//!
//! let mut frame = DrawList::new();
//! game.render(&mut frame);
//! assert_eq!(frame.rects().count(), 4);
//! ```

pub mod collision;
pub mod game;
pub mod grid;
pub mod piece;
pub mod scoring;
pub mod shape;
pub mod spawner;
pub mod surface;

pub use blockfall_types as types;

pub use collision::{collides, merge};
pub use game::{GameState, GameStatus, StepOutcome};
pub use grid::{ClearedRows, Grid};
pub use piece::{spawn_x, Piece};
pub use scoring::line_clear_score;
pub use shape::{Shape, ShapeKind, SHAPES};
pub use spawner::Spawner;
pub use surface::{DrawCommand, DrawList, Surface};
