//! Core types module - shared data structures and constants
//!
//! Pure data types with no external dependencies, shared by the simulation
//! core, the frame loop and the terminal collaborators.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Block size**: 30 pixels per cell on the drawing surface
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_FPS` | 60 | Frame pacing target |
//! | `FALL_INTERVAL_MS` | 500 | Gravity: one row per interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{InputAction, InputState, GRID_HEIGHT, GRID_WIDTH};
//!
//! let mut input = InputState::empty();
//! input.press("ArrowLeft");
//! input.press("ArrowUp");
//! input.press("KeyQ-unknown");
//!
//! // Left wins over rotate; unknown identifiers are ignored.
//! assert_eq!(input.priority_action(), Some(InputAction::MoveLeft));
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

use std::fmt;

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Edge length of one cell on the drawing surface, in pixels
pub const BLOCK_SIZE: u32 = 30;

/// Drawing surface width in pixels
pub const SCREEN_WIDTH: u32 = GRID_WIDTH as u32 * BLOCK_SIZE;

/// Drawing surface height in pixels
pub const SCREEN_HEIGHT: u32 = GRID_HEIGHT as u32 * BLOCK_SIZE;

/// Frame pacing target (updates per second)
pub const TARGET_FPS: u32 = 60;

/// Gravity interval: the active piece drops one row once the fall timer exceeds this
pub const FALL_INTERVAL_MS: u32 = 500;

/// Score awarded per cleared row
pub const LINE_CLEAR_SCORE: u32 = 100;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (the leading `#` is optional).
    ///
    /// ```
    /// use blockfall_types::{Color, ORANGE};
    ///
    /// assert_eq!(Color::from_hex("#FFA500"), Some(ORANGE));
    /// assert_eq!(Color::from_hex("ffa500"), Some(ORANGE));
    /// assert_eq!(Color::from_hex("#FFA5"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);
pub const CYAN: Color = Color::new(0x00, 0xFF, 0xFF);
pub const YELLOW: Color = Color::new(0xFF, 0xFF, 0x00);
pub const MAGENTA: Color = Color::new(0xFF, 0x00, 0xFF);
pub const RED: Color = Color::new(0xFF, 0x00, 0x00);
pub const GREEN: Color = Color::new(0x00, 0xFF, 0x00);
pub const BLUE: Color = Color::new(0x00, 0x00, 0xFF);
pub const ORANGE: Color = Color::new(0xFF, 0xA5, 0x00);

/// Piece color palette. Drawn independently of the shape at spawn.
pub const PIECE_COLORS: [Color; 7] = [CYAN, YELLOW, MAGENTA, RED, GREEN, BLUE, ORANGE];

/// Cell on the grid (None = empty, Some = filled with a locked piece's color)
pub type Cell = Option<Color>;

/// Player intents read from the input snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Quit,
}

/// Order in which held gameplay actions are considered. Only the first held
/// one is applied per frame.
pub const ACTION_PRIORITY: [InputAction; 4] = [
    InputAction::MoveLeft,
    InputAction::MoveRight,
    InputAction::SoftDrop,
    InputAction::Rotate,
];

impl InputAction {
    /// Parse an input identifier (case-sensitive key names, case-insensitive aliases)
    ///
    /// ```
    /// use blockfall_types::InputAction;
    ///
    /// assert_eq!(InputAction::from_identifier("ArrowLeft"), Some(InputAction::MoveLeft));
    /// assert_eq!(InputAction::from_identifier("rotate"), Some(InputAction::Rotate));
    /// assert_eq!(InputAction::from_identifier("Space"), None);
    /// ```
    pub fn from_identifier(s: &str) -> Option<Self> {
        match s {
            "ArrowLeft" => return Some(InputAction::MoveLeft),
            "ArrowRight" => return Some(InputAction::MoveRight),
            "ArrowDown" => return Some(InputAction::SoftDrop),
            "ArrowUp" => return Some(InputAction::Rotate),
            "Escape" => return Some(InputAction::Quit),
            _ => {}
        }
        match s.to_lowercase().as_str() {
            "move-left" | "moveleft" => Some(InputAction::MoveLeft),
            "move-right" | "moveright" => Some(InputAction::MoveRight),
            "soft-drop" | "softdrop" => Some(InputAction::SoftDrop),
            "rotate" => Some(InputAction::Rotate),
            "quit" => Some(InputAction::Quit),
            _ => None,
        }
    }

    /// Canonical identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            InputAction::MoveLeft => "move-left",
            InputAction::MoveRight => "move-right",
            InputAction::SoftDrop => "soft-drop",
            InputAction::Rotate => "rotate",
            InputAction::Quit => "quit",
        }
    }

    #[inline(always)]
    fn bit(self) -> u8 {
        match self {
            InputAction::MoveLeft => 1 << 0,
            InputAction::MoveRight => 1 << 1,
            InputAction::SoftDrop => 1 << 2,
            InputAction::Rotate => 1 << 3,
            InputAction::Quit => 1 << 4,
        }
    }
}

/// Snapshot of currently held inputs.
///
/// Produced by the input collaborator once per frame and handed to the
/// simulation by value; the simulation never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InputState {
    bits: u8,
}

impl InputState {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn with(mut self, action: InputAction) -> Self {
        self.insert(action);
        self
    }

    pub fn insert(&mut self, action: InputAction) {
        self.bits |= action.bit();
    }

    pub fn remove(&mut self, action: InputAction) {
        self.bits &= !action.bit();
    }

    pub fn contains(&self, action: InputAction) -> bool {
        self.bits & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Mark the action named by `identifier` as held.
    /// Returns false (and changes nothing) for unrecognized identifiers.
    pub fn press(&mut self, identifier: &str) -> bool {
        match InputAction::from_identifier(identifier) {
            Some(action) => {
                self.insert(action);
                true
            }
            None => false,
        }
    }

    /// Release the action named by `identifier`; unknown identifiers are ignored.
    pub fn release(&mut self, identifier: &str) {
        if let Some(action) = InputAction::from_identifier(identifier) {
            self.remove(action);
        }
    }

    /// The single gameplay action to apply this frame, per [`ACTION_PRIORITY`].
    pub fn priority_action(&self) -> Option<InputAction> {
        ACTION_PRIORITY.into_iter().find(|a| self.contains(*a))
    }

    pub fn quit_requested(&self) -> bool {
        self.contains(InputAction::Quit)
    }
}

impl FromIterator<InputAction> for InputState {
    fn from_iter<T: IntoIterator<Item = InputAction>>(iter: T) -> Self {
        iter.into_iter()
            .fold(InputState::empty(), |state, action| state.with(action))
    }
}

/// Runtime configuration for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Gravity interval in milliseconds
    pub fall_interval_ms: u32,
    /// Frame pacing target
    pub target_fps: u32,
    /// RNG seed for spawns; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fall_interval_ms(mut self, fall_interval_ms: u32) -> Self {
        self.fall_interval_ms = fall_interval_ms;
        self
    }

    pub fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps.max(1);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fall_interval_ms: FALL_INTERVAL_MS,
            target_fps: TARGET_FPS,
            seed: None,
        }
    }
}
