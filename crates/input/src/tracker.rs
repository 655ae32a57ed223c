//! Held-key tracking.
//!
//! Most terminals only report presses (plus auto-repeat), never releases.
//! A key counts as held until [`KeyTracker::release`] is called or, while no
//! release event has ever been seen, until it has been quiet for the release
//! timeout. Once a release event arrives the timeout is no longer applied.

use arrayvec::ArrayVec;

use crate::types::{InputAction, InputState};

/// How long a press counts as held on terminals that never report releases.
///
/// Shorter than the usual auto-repeat delay (250 to 600 ms), so a tap stays a
/// tap. A key held down drops out after the timeout and comes back when the
/// terminal starts repeating it; terminals that report releases (keyboard
/// enhancement) track held keys exactly.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

const ACTIONS: [InputAction; 5] = [
    InputAction::MoveLeft,
    InputAction::MoveRight,
    InputAction::SoftDrop,
    InputAction::Rotate,
    InputAction::Quit,
];

#[derive(Debug, Clone)]
pub struct KeyTracker {
    /// Last press time per action, indexed like `ACTIONS`
    last_press_ms: [Option<u64>; 5],
    release_timeout_ms: u64,
    release_events_seen: bool,
}

fn slot(action: InputAction) -> usize {
    match action {
        InputAction::MoveLeft => 0,
        InputAction::MoveRight => 1,
        InputAction::SoftDrop => 2,
        InputAction::Rotate => 3,
        InputAction::Quit => 4,
    }
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::with_release_timeout_ms(DEFAULT_KEY_RELEASE_TIMEOUT_MS)
    }

    pub fn with_release_timeout_ms(release_timeout_ms: u64) -> Self {
        Self {
            last_press_ms: [None; 5],
            release_timeout_ms,
            release_events_seen: false,
        }
    }

    pub fn release_timeout_ms(&self) -> u64 {
        self.release_timeout_ms
    }

    /// Press or auto-repeat at `now_ms`
    pub fn press(&mut self, action: InputAction, now_ms: u64) {
        self.last_press_ms[slot(action)] = Some(now_ms);
    }

    pub fn press_identifier(&mut self, identifier: &str, now_ms: u64) -> bool {
        match InputAction::from_identifier(identifier) {
            Some(action) => {
                self.press(action, now_ms);
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, action: InputAction) {
        self.release_events_seen = true;
        self.last_press_ms[slot(action)] = None;
    }

    pub fn release_all(&mut self) {
        self.last_press_ms = [None; 5];
    }

    fn is_held(&self, action: InputAction, now_ms: u64) -> bool {
        match self.last_press_ms[slot(action)] {
            Some(_) if self.release_events_seen => true,
            Some(at) => now_ms.saturating_sub(at) <= self.release_timeout_ms,
            None => false,
        }
    }

    /// Actions held at `now_ms`, in priority order
    pub fn held(&self, now_ms: u64) -> ArrayVec<InputAction, 5> {
        ACTIONS
            .into_iter()
            .filter(|a| self.is_held(*a, now_ms))
            .collect()
    }

    pub fn snapshot(&self, now_ms: u64) -> InputState {
        self.held(now_ms).into_iter().collect()
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_holds_until_timeout() {
        let mut t = KeyTracker::new();
        t.press(InputAction::MoveLeft, 1_000);

        assert!(t.snapshot(1_000).contains(InputAction::MoveLeft));
        assert!(t.snapshot(1_150).contains(InputAction::MoveLeft));
        assert!(t.snapshot(1_151).is_empty());
    }

    #[test]
    fn tap_ends_before_auto_repeat_would_start() {
        let mut t = KeyTracker::new();
        t.press(InputAction::MoveLeft, 0);
        // No repeat arrives before the shortest common repeat delay
        assert!(t.snapshot(250).is_empty());
    }

    #[test]
    fn auto_repeat_extends_hold() {
        let mut t = KeyTracker::new();
        t.press(InputAction::SoftDrop, 0);
        t.press(InputAction::SoftDrop, 100);
        t.press(InputAction::SoftDrop, 200);
        assert!(t.snapshot(340).contains(InputAction::SoftDrop));
    }

    #[test]
    fn release_event_disables_timeout() {
        let mut t = KeyTracker::new();
        t.press(InputAction::Rotate, 0);
        t.release(InputAction::Rotate);
        assert!(t.snapshot(0).is_empty());

        t.press(InputAction::MoveRight, 0);
        assert!(t.snapshot(10_000).contains(InputAction::MoveRight));
    }

    #[test]
    fn unknown_identifiers_ignored() {
        let mut t = KeyTracker::new();
        assert!(!t.press_identifier("Tab", 0));
        assert!(t.press_identifier("ArrowUp", 0));
        assert_eq!(t.held(0).as_slice(), &[InputAction::Rotate]);
    }

    #[test]
    fn held_is_in_priority_order() {
        let mut t = KeyTracker::new();
        t.press(InputAction::Rotate, 0);
        t.press(InputAction::MoveRight, 0);
        t.press(InputAction::MoveLeft, 0);
        assert_eq!(
            t.held(0).as_slice(),
            &[InputAction::MoveLeft, InputAction::MoveRight, InputAction::Rotate]
        );
        assert_eq!(t.snapshot(0).priority_action(), Some(InputAction::MoveLeft));

        t.release_all();
        assert!(t.snapshot(0).is_empty());
    }
}
