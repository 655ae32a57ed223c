//! Frame loop - drives a [`GameState`](blockfall_core::GameState) at a fixed
//! target rate.
//!
//! The loop is single threaded and cooperative. Each frame it awaits the
//! [`Clock`] (the pacing point), reads one [`InputState`](blockfall_types::InputState)
//! snapshot from an [`InputSource`], steps the simulation, renders onto a
//! [`Canvas`] and yields back to the scheduler.
//!
//! Collaborators are traits so the loop runs the same against the terminal,
//! a scripted test harness, or a headless benchmark.

pub mod clock;
pub mod runner;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use clock::{Clock, SteppedClock, TokioClock};
pub use runner::{run_game, Canvas, ExitReason, GameOutcome, InputSource};
