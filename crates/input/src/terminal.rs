//! Terminal-backed [`InputSource`].

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use blockfall_engine::InputSource;

use crate::map::{map_key, should_quit};
use crate::tracker::KeyTracker;
use crate::types::{InputAction, InputState};

/// Drains pending crossterm events without blocking and reports the held set.
#[derive(Debug)]
pub struct TerminalInput {
    tracker: KeyTracker,
    started: Instant,
    quit: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::with_tracker(KeyTracker::new())
    }

    pub fn with_tracker(tracker: KeyTracker) -> Self {
        Self {
            tracker,
            started: Instant::now(),
            quit: false,
        }
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Feed one key event into the held set.
    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if should_quit(key) {
                    self.quit = true;
                    return;
                }
                if let Some(action) = map_key(key.code) {
                    self.tracker.press(action, now_ms);
                }
            }
            KeyEventKind::Release => {
                if let Some(action) = map_key(key.code) {
                    self.tracker.release(action);
                }
            }
        }
    }

    pub fn snapshot(&self, now_ms: u64) -> InputState {
        let mut state = self.tracker.snapshot(now_ms);
        if self.quit {
            state.insert(InputAction::Quit);
        }
        state
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<InputState> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    let now = self.now_ms();
                    self.handle_key(key, now);
                }
                Event::FocusLost => self.tracker.release_all(),
                _ => {}
            }
        }
        Ok(self.snapshot(self.now_ms()))
    }
}
