//! Terminal input module.
//!
//! Maps `crossterm` key events to input identifiers and keeps the set of held
//! keys, producing one [`InputState`](blockfall_types::InputState) snapshot
//! per frame. Terminals that never report key releases are handled with a
//! release timeout.

pub mod map;
pub mod terminal;
pub mod tracker;

pub use blockfall_types as types;

pub use map::{key_identifier, map_key, should_quit};
pub use terminal::TerminalInput;
pub use tracker::{KeyTracker, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
