//! Key chord type.
//!
//! A chord is a physical key plus modifier state. Physical key codes survive
//! keyboard layout switches, which is why the store never records produced
//! characters.

use serde::{Deserialize, Serialize};
use std::fmt;
use winit::keyboard::KeyCode;

fn is_false(v: &bool) -> bool {
    !*v
}

/// A physical key plus modifier combination.
///
/// Equality is exact on all four fields: `Ctrl+K`, `Shift+K` and bare `K`
/// are three distinct chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyChord {
    /// Physical key code, e.g. `KeyK` or `ArrowUp`.
    pub key: KeyCode,
    #[serde(default, skip_serializing_if = "is_false")]
    pub ctrl: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub alt: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub shift: bool,
}

impl KeyChord {
    /// Chord with no modifiers.
    pub const fn new(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub const fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub const fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub const fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
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
        parts.push(key_label(self.key));

        write!(f, "{}", parts.join("+"))
    }
}

/// Short display label for a key code: `KeyK` → `K`, `Digit5` → `5`,
/// everything else keeps its code name (`ArrowUp`, `Slash`, ...).
pub fn key_label(key: KeyCode) -> String {
    let name = format!("{key:?}");
    name.strip_prefix("Key")
        .or_else(|| name.strip_prefix("Digit"))
        .map(str::to_owned)
        .unwrap_or(name)
}
