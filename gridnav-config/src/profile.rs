//! Binding and profile types.

use crate::chord::KeyChord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;

/// Number of chord slots per binding — two columns in the settings grid.
pub const SLOT_COUNT: usize = 2;

/// The chords assigned to one action: up to [`SLOT_COUNT`] ordered slots.
///
/// Serialized transparently as the sparse chord array the store has always
/// used: `[{"key":"KeyW"},{"key":"ArrowUp"}]`, `[null,{"key":"KeyX"}]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Binding {
    slots: Vec<Option<KeyChord>>,
}

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binding with a single chord in the first slot.
    pub fn single(chord: KeyChord) -> Self {
        Self {
            slots: vec![Some(chord)],
        }
    }

    /// Binding with both slots filled.
    pub fn pair(first: KeyChord, second: KeyChord) -> Self {
        Self {
            slots: vec![Some(first), Some(second)],
        }
    }

    /// Chord in `slot`, if configured.
    pub fn slot(&self, slot: usize) -> Option<&KeyChord> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Write `chord` into `slot`, growing the slot list as needed.
    /// Indices at or past [`SLOT_COUNT`] are ignored.
    pub fn set_slot(&mut self, slot: usize, chord: KeyChord) {
        if slot >= SLOT_COUNT {
            return;
        }
        if self.slots.len() <= slot {
            self.slots.resize(slot + 1, None);
        }
        self.slots[slot] = Some(chord);
    }

    /// Empty `slot`, leaving other slots untouched.
    pub fn clear_slot(&mut self, slot: usize) {
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = None;
        }
    }

    /// True when no slot holds a chord.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Configured chords in slot order.
    pub fn chords(&self) -> impl Iterator<Item = &KeyChord> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Drop slots past [`SLOT_COUNT`] (hand-edited store files).
    pub(crate) fn truncate(&mut self) {
        self.slots.truncate(SLOT_COUNT);
    }
}

/// A named set of action → binding entries. The map is ordered so saved
/// JSON stays stable across writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    bindings: BTreeMap<String, Binding>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn binding(&self, action: &str) -> Option<&Binding> {
        self.bindings.get(action)
    }

    pub fn binding_mut(&mut self, action: &str) -> Option<&mut Binding> {
        self.bindings.get_mut(action)
    }

    /// Binding for `action`, created empty if absent.
    pub fn binding_entry(&mut self, action: &str) -> &mut Binding {
        self.bindings.entry(action.to_string()).or_default()
    }

    pub fn insert(&mut self, action: impl Into<String>, binding: Binding) {
        self.bindings.insert(action.into(), binding);
    }

    pub fn remove(&mut self, action: &str) -> Option<Binding> {
        self.bindings.remove(action)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.bindings.iter().map(|(action, binding)| (action.as_str(), binding))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drop empty binding entries and oversized slot lists.
    pub(crate) fn normalize(&mut self) {
        for binding in self.bindings.values_mut() {
            binding.truncate();
        }
        self.bindings.retain(|_, binding| !binding.is_empty());
    }
}

/// Identifier of a keybind profile.
///
/// `Default` through `Preset3` are selectable; `Global` is merged in under
/// every selection; `Reserved` is fixed, never persisted, never assignable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileId {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "preset_1")]
    Preset1,
    #[serde(rename = "preset_2")]
    Preset2,
    #[serde(rename = "preset_3")]
    Preset3,
    #[serde(rename = "global")]
    Global,
    #[serde(rename = "reserved")]
    Reserved,
}

impl ProfileId {
    /// Profiles the user can make active.
    pub const SELECTABLE: [ProfileId; 4] = [
        ProfileId::Default,
        ProfileId::Preset1,
        ProfileId::Preset2,
        ProfileId::Preset3,
    ];

    pub fn is_selectable(self) -> bool {
        Self::SELECTABLE.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileId::Default => "default",
            ProfileId::Preset1 => "preset_1",
            ProfileId::Preset2 => "preset_2",
            ProfileId::Preset3 => "preset_3",
            ProfileId::Global => "global",
            ProfileId::Reserved => "reserved",
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(ProfileId::Default),
            "preset_1" => Ok(ProfileId::Preset1),
            "preset_2" => Ok(ProfileId::Preset2),
            "preset_3" => Ok(ProfileId::Preset3),
            "global" => Ok(ProfileId::Global),
            "reserved" => Ok(ProfileId::Reserved),
            other => Err(StoreError::InvalidProfile(other.to_string())),
        }
    }
}
