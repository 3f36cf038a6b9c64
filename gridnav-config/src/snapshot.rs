//! The persisted profiles document.

use crate::defaults;
use crate::profile::{Profile, ProfileId};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Current persisted schema version. Any other value is treated as corrupt
/// state and reseeded — there is no migration machinery.
pub const SCHEMA_VERSION: u32 = 1;

/// All persisted keybind profiles. `reserved` is deliberately absent: it is
/// fixed in code and merged in at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keybinds {
    #[serde(default)]
    pub default: Profile,
    #[serde(default)]
    pub preset_1: Profile,
    #[serde(default)]
    pub preset_2: Profile,
    #[serde(default)]
    pub preset_3: Profile,
    #[serde(default)]
    pub global: Profile,
}

/// The whole persisted document: schema version, profiles, active profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilesSnapshot {
    #[serde(rename = "schemaVersion")]
    pub schema_version: u32,
    pub keybinds: Keybinds,
    #[serde(rename = "usePreset")]
    pub use_preset: ProfileId,
}

impl ProfilesSnapshot {
    /// First-run snapshot: the seeded binding tables with `default` active.
    pub fn seeded() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            keybinds: defaults::keybinds(),
            use_preset: ProfileId::Default,
        }
    }

    /// The profile stored under `id`. `Reserved` yields the fixed in-code
    /// profile.
    pub fn profile(&self, id: ProfileId) -> &Profile {
        match id {
            ProfileId::Default => &self.keybinds.default,
            ProfileId::Preset1 => &self.keybinds.preset_1,
            ProfileId::Preset2 => &self.keybinds.preset_2,
            ProfileId::Preset3 => &self.keybinds.preset_3,
            ProfileId::Global => &self.keybinds.global,
            ProfileId::Reserved => reserved_profile(),
        }
    }

    /// Mutable access to a persisted profile. `Reserved` is not persisted
    /// and never writable.
    pub fn profile_mut(&mut self, id: ProfileId) -> Option<&mut Profile> {
        match id {
            ProfileId::Default => Some(&mut self.keybinds.default),
            ProfileId::Preset1 => Some(&mut self.keybinds.preset_1),
            ProfileId::Preset2 => Some(&mut self.keybinds.preset_2),
            ProfileId::Preset3 => Some(&mut self.keybinds.preset_3),
            ProfileId::Global => Some(&mut self.keybinds.global),
            ProfileId::Reserved => None,
        }
    }

    /// The currently active profile's bindings.
    pub fn active(&self) -> &Profile {
        self.profile(self.use_preset)
    }

    /// Post-load cleanup: drop empty entries and oversized slot lists.
    pub(crate) fn normalize(&mut self) {
        self.keybinds.default.normalize();
        self.keybinds.preset_1.normalize();
        self.keybinds.preset_2.normalize();
        self.keybinds.preset_3.normalize();
        self.keybinds.global.normalize();
    }
}

/// Fixed, non-configurable bindings, always merged into resolution and never
/// assignable through the configuration surface.
pub fn reserved_profile() -> &'static Profile {
    static RESERVED: LazyLock<Profile> = LazyLock::new(defaults::reserved);
    &RESERVED
}
