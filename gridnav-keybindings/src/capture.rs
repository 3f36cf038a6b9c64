//! Chord capture for settings input rows.
//!
//! Each input row in the settings grid owns a [`ChordDraft`] value; key
//! events fold into it and the row re-renders from [`ChordDraft::render`].
//! Capture rules:
//! - Escape, Backspace and Delete wipe the row (and its stored slot)
//! - repeats, and any key after the row committed, are ignored
//! - modifier key-down/key-up toggles the pending ctrl/alt/shift flags
//! - the first non-modifier key commits the chord

use gridnav_config::{KeyChord, key_label};
use winit::keyboard::KeyCode;

enum Modifier {
    Ctrl,
    Alt,
    Shift,
}

fn modifier_of(key: KeyCode) -> Option<Modifier> {
    match key {
        KeyCode::ControlLeft | KeyCode::ControlRight => Some(Modifier::Ctrl),
        KeyCode::AltLeft | KeyCode::AltRight => Some(Modifier::Alt),
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Modifier::Shift),
        _ => None,
    }
}

/// In-progress chord for one settings input row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChordDraft {
    key: Option<KeyCode>,
    ctrl: bool,
    alt: bool,
    shift: bool,
}

/// What a key event did to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftEvent {
    /// Nothing changed (repeat, or the row is already committed).
    Ignored,
    /// Pending modifiers changed; re-render the row.
    Updated,
    /// The row was cleared; clear the stored slot too.
    Cleared,
    /// A full chord was captured; validate and store it.
    Committed(KeyChord),
}

impl ChordDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_committed(&self) -> bool {
        self.key.is_some()
    }

    /// The captured chord, once committed.
    pub fn chord(&self) -> Option<KeyChord> {
        self.key.map(|key| KeyChord {
            key,
            ctrl: self.ctrl,
            alt: self.alt,
            shift: self.shift,
        })
    }

    /// Fold a key-down into the draft.
    pub fn key_down(&mut self, key: KeyCode, repeat: bool) -> DraftEvent {
        if matches!(key, KeyCode::Escape | KeyCode::Backspace | KeyCode::Delete) {
            *self = Self::default();
            return DraftEvent::Cleared;
        }
        if repeat || self.key.is_some() {
            return DraftEvent::Ignored;
        }
        match modifier_of(key) {
            Some(Modifier::Ctrl) => {
                self.ctrl = true;
                DraftEvent::Updated
            }
            Some(Modifier::Alt) => {
                self.alt = true;
                DraftEvent::Updated
            }
            Some(Modifier::Shift) => {
                self.shift = true;
                DraftEvent::Updated
            }
            None => {
                self.key = Some(key);
                DraftEvent::Committed(KeyChord {
                    key,
                    ctrl: self.ctrl,
                    alt: self.alt,
                    shift: self.shift,
                })
            }
        }
    }

    /// Fold a key-up into the draft. Releasing a modifier before the row
    /// commits drops its pending flag.
    pub fn key_up(&mut self, key: KeyCode, repeat: bool) -> DraftEvent {
        if repeat || self.key.is_some() {
            return DraftEvent::Ignored;
        }
        match modifier_of(key) {
            Some(Modifier::Ctrl) => {
                self.ctrl = false;
                DraftEvent::Updated
            }
            Some(Modifier::Alt) => {
                self.alt = false;
                DraftEvent::Updated
            }
            Some(Modifier::Shift) => {
                self.shift = false;
                DraftEvent::Updated
            }
            None => DraftEvent::Ignored,
        }
    }

    /// Row text: pending modifiers alone ("Ctrl+Shift"), or the full chord
    /// once committed ("Ctrl+Shift+K"). Empty drafts render empty.
    pub fn render(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.alt {
            parts.push("Alt".to_string());
        }
        if self.shift {
            parts.push("Shift".to_string());
        }
        if let Some(key) = self.key {
            parts.push(key_label(key));
        }
        parts.join("+")
    }
}
