//! Held-key tracking on top of crossterm key events.
//!
//! Terminals that speak the keyboard enhancement protocol report press,
//! repeat and release, so a key is held from press until release. Classic
//! terminals only repeat presses while a key is down; there a key stays held
//! for `HOLD_WINDOW` frames after its last press and then expires.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Frames a key stays held without a fresh press/repeat (about 133 ms at
/// 60 FPS, shorter than the OS repeat period).
pub const HOLD_WINDOW: u64 = 8;

/// Movement intent for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Default)]
pub struct HeldKeys {
    last_seen: HashMap<KeyCode, u64>,
    frame: u64,
    release_events: bool,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// For terminals that report key releases: keys stay held until released.
    pub fn with_release_events() -> Self {
        Self {
            release_events: true,
            ..Self::default()
        }
    }

    pub fn record(&mut self, key: &KeyEvent) {
        let code = normalize(key.code);
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(code, self.frame);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&code);
            }
        }
    }

    /// Moves to the next frame and forgets keys that have gone quiet.
    pub fn advance(&mut self) {
        self.frame += 1;
        if self.release_events {
            return;
        }
        let frame = self.frame;
        self.last_seen
            .retain(|_, last| frame.saturating_sub(*last) <= HOLD_WINDOW);
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.last_seen.contains_key(&normalize(code))
    }

    pub fn controls(&self) -> Controls {
        Controls {
            left: self.is_held(KeyCode::Left) || self.is_held(KeyCode::Char('a')),
            right: self.is_held(KeyCode::Right) || self.is_held(KeyCode::Char('d')),
        }
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}

/// 'A' and 'a' are the same key whether or not shift is down.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
