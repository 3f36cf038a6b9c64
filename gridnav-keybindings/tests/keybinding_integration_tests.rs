//! Integration tests for gridnav-keybindings.
//!
//! These tests exercise the full bind → resolve → clear pipeline against a
//! seeded snapshot, the way the configuration surface drives it.

use gridnav_config::{KeyChord, ProfileId, ProfilesSnapshot};
use gridnav_keybindings::{BindError, BindScope, bind_slot, clear_slot, resolve};
use winit::keyboard::KeyCode;

fn snapshot_on(profile: ProfileId) -> ProfilesSnapshot {
    let mut snapshot = ProfilesSnapshot::seeded();
    snapshot.use_preset = profile;
    snapshot
}

// ---------------------------------------------------------------------------
// Bind / resolve round trips
// ---------------------------------------------------------------------------

#[test]
fn successful_bind_resolves_immediately() {
    for profile in [ProfileId::Preset1, ProfileId::Preset2, ProfileId::Preset3] {
        let mut snapshot = snapshot_on(profile);
        let chord = KeyChord::new(KeyCode::KeyP).with_ctrl();

        bind_slot(&mut snapshot, BindScope::Active, "open_selected", 1, chord).unwrap();
        assert_eq!(resolve(&snapshot, &chord), Some("open_selected"));
    }
}

#[test]
fn bind_then_clear_all_restores_pre_bind_shape() {
    let mut snapshot = snapshot_on(ProfileId::Preset3);
    let before = snapshot.clone();

    bind_slot(
        &mut snapshot,
        BindScope::Active,
        "upvote",
        0,
        KeyChord::new(KeyCode::KeyU),
    )
    .unwrap();
    bind_slot(
        &mut snapshot,
        BindScope::Active,
        "upvote",
        1,
        KeyChord::new(KeyCode::KeyU).with_shift(),
    )
    .unwrap();
    assert_ne!(snapshot, before);

    clear_slot(&mut snapshot, BindScope::Active, "upvote", 0).unwrap();
    clear_slot(&mut snapshot, BindScope::Active, "upvote", 1).unwrap();
    assert_eq!(snapshot, before);
}

#[test]
fn second_slot_resolves_like_the_first() {
    let snapshot = snapshot_on(ProfileId::Preset1);
    // preset_1 scroll_up is [KeyW, ArrowUp]
    assert_eq!(
        resolve(&snapshot, &KeyChord::new(KeyCode::KeyW)),
        Some("scroll_up")
    );
    assert_eq!(
        resolve(&snapshot, &KeyChord::new(KeyCode::ArrowUp)),
        Some("scroll_up")
    );
}

// ---------------------------------------------------------------------------
// Validation failures
// ---------------------------------------------------------------------------

#[test]
fn duplicate_binding_is_rejected_across_sources() {
    let mut snapshot = snapshot_on(ProfileId::Preset1);

    // collides with the active profile
    assert!(matches!(
        bind_slot(
            &mut snapshot,
            BindScope::Active,
            "next",
            0,
            KeyChord::new(KeyCode::KeyZ)
        ),
        Err(BindError::DuplicateBinding { .. })
    ));

    // collides with the global profile
    assert!(matches!(
        bind_slot(
            &mut snapshot,
            BindScope::Active,
            "next",
            0,
            KeyChord::new(KeyCode::Backquote).with_alt()
        ),
        Err(BindError::DuplicateBinding { .. })
    ));

    // collides with a reserved binding (not on the key deny list)
    assert!(matches!(
        bind_slot(
            &mut snapshot,
            BindScope::Active,
            "next",
            0,
            KeyChord::new(KeyCode::Slash).with_ctrl().with_shift()
        ),
        Err(BindError::DuplicateBinding { .. })
    ));
}

#[test]
fn chord_freed_by_clear_can_be_rebound() {
    let mut snapshot = snapshot_on(ProfileId::Preset1);
    let chord = KeyChord::new(KeyCode::KeyQ);

    clear_slot(&mut snapshot, BindScope::Active, "toggle_keyboard_nav", 0).unwrap();
    bind_slot(&mut snapshot, BindScope::Active, "random", 1, chord).unwrap();
    assert_eq!(resolve(&snapshot, &chord), Some("random"));
}

#[test]
fn reserved_keys_never_bind() {
    let mut snapshot = snapshot_on(ProfileId::Preset2);
    for key in [KeyCode::Escape, KeyCode::Backspace, KeyCode::Delete] {
        assert!(matches!(
            bind_slot(
                &mut snapshot,
                BindScope::Active,
                "next",
                0,
                KeyChord::new(key)
            ),
            Err(BindError::ReservedKey(_))
        ));
    }
}

#[test]
fn default_profile_rejects_writes_but_still_resolves() {
    let mut snapshot = snapshot_on(ProfileId::Default);

    assert!(matches!(
        bind_slot(
            &mut snapshot,
            BindScope::Active,
            "next",
            0,
            KeyChord::new(KeyCode::KeyN)
        ),
        Err(BindError::InvalidProfile(ProfileId::Default))
    ));
    assert!(matches!(
        clear_slot(&mut snapshot, BindScope::Active, "next", 0),
        Err(BindError::InvalidProfile(ProfileId::Default))
    ));

    // the action set still functions
    assert_eq!(
        resolve(&snapshot, &KeyChord::new(KeyCode::KeyK)),
        Some("next")
    );
}
