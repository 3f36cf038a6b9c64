//! Chord → action resolution.
//!
//! The merged binding set is {active profile} ∪ {global} ∪ {reserved} —
//! three distinct namespaces, unioned rather than overlaid. A chord
//! colliding across sources is a configuration error caught at write time
//! (see `binder`), so first-match is the only match and scan order cannot
//! change the result.

use gridnav_config::{KeyChord, ProfileId, ProfilesSnapshot, reserved_profile};

/// Look up the action bound to `chord` under the snapshot's active profile.
///
/// Returns `None` for unbound chords — the expected steady state, not an
/// error.
pub fn resolve<'a>(snapshot: &'a ProfilesSnapshot, chord: &KeyChord) -> Option<&'a str> {
    let sources = [
        snapshot.active(),
        snapshot.profile(ProfileId::Global),
        reserved_profile(),
    ];

    for profile in sources {
        for (action, binding) in profile.iter() {
            if binding.chords().any(|bound| bound == chord) {
                log::debug!("chord {chord} resolved to '{action}'");
                return Some(action);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn resolves_seeded_default_bindings() {
        let snapshot = ProfilesSnapshot::seeded();
        assert_eq!(
            resolve(&snapshot, &KeyChord::new(KeyCode::KeyK)),
            Some("next")
        );
        assert_eq!(
            resolve(&snapshot, &KeyChord::new(KeyCode::KeyJ)),
            Some("prev")
        );
    }

    #[test]
    fn unbound_chord_is_no_match() {
        let snapshot = ProfilesSnapshot::seeded();
        assert_eq!(resolve(&snapshot, &KeyChord::new(KeyCode::KeyZ)), None);
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let snapshot = ProfilesSnapshot::seeded();
        assert_eq!(
            resolve(&snapshot, &KeyChord::new(KeyCode::KeyK).with_ctrl()),
            None
        );
        assert_eq!(
            resolve(&snapshot, &KeyChord::new(KeyCode::KeyK).with_shift()),
            None
        );
    }

    #[test]
    fn global_bindings_resolve_under_every_profile() {
        let mut snapshot = ProfilesSnapshot::seeded();
        let switch = KeyChord::new(KeyCode::Digit2).with_alt();
        assert_eq!(resolve(&snapshot, &switch), Some("use_preset_2"));

        snapshot.use_preset = ProfileId::Preset3;
        assert_eq!(resolve(&snapshot, &switch), Some("use_preset_2"));
    }

    #[test]
    fn reserved_bindings_always_resolve() {
        let mut snapshot = ProfilesSnapshot::seeded();
        assert_eq!(
            resolve(&snapshot, &KeyChord::new(KeyCode::Escape)),
            Some("unfocus")
        );

        snapshot.use_preset = ProfileId::Preset1;
        assert_eq!(
            resolve(&snapshot, &KeyChord::new(KeyCode::Slash).with_ctrl().with_shift()),
            Some("toggle_settings")
        );
    }

    #[test]
    fn inactive_profiles_do_not_resolve() {
        let snapshot = ProfilesSnapshot::seeded();
        // KeyQ only exists in preset_1, which is not active
        assert_eq!(resolve(&snapshot, &KeyChord::new(KeyCode::KeyQ)), None);
    }
}
