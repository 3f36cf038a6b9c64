//! Configuration write path.
//!
//! Every binding mutation goes through here, which is what keeps the
//! write-time invariant: no two bindings across {active, global, reserved}
//! share a chord. Resolution (`resolver`) relies on that and never
//! re-verifies.

use crate::resolver::resolve;
use gridnav_config::{KeyChord, ProfileId, ProfilesSnapshot, SLOT_COUNT};
use thiserror::Error;
use winit::keyboard::KeyCode;

/// Keys that must keep their default platform behavior. These can never be
/// bound to a custom action, with any modifier combination.
pub const RESERVED_KEYS: &[KeyCode] = &[
    KeyCode::Escape,
    KeyCode::Backspace,
    KeyCode::Delete,
    KeyCode::SuperLeft,
    KeyCode::SuperRight,
    KeyCode::ContextMenu,
];

pub fn is_reserved_key(key: KeyCode) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Which profile a configuration write lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindScope {
    /// The currently active profile. Rejected while `default` is active —
    /// the default profile is read-only.
    Active,
    /// The `global` profile, regardless of the active one. Used for actions
    /// flagged `global`.
    Global,
}

/// Validation failures from the configuration write path.
///
/// `DuplicateBinding` and `ReservedKey` are user-facing (inline validation
/// messages); `InvalidProfile` and `InvalidSlot` are programmer errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The chord already resolves to a different action in the merged set.
    #[error("'{chord}' is already bound to '{action}'")]
    DuplicateBinding { chord: KeyChord, action: String },

    /// The key is on the deny list and keeps its platform behavior.
    #[error("'{0:?}' is a reserved key")]
    ReservedKey(KeyCode),

    /// The write target is not editable.
    #[error("profile '{0}' is not editable")]
    InvalidProfile(ProfileId),

    /// Slot index past the two-slot settings grid.
    #[error("slot index {0} out of range")]
    InvalidSlot(usize),
}

fn target_id(snapshot: &ProfilesSnapshot, scope: BindScope) -> Result<ProfileId, BindError> {
    match scope {
        BindScope::Global => Ok(ProfileId::Global),
        BindScope::Active => {
            let id = snapshot.use_preset;
            if id == ProfileId::Default {
                Err(BindError::InvalidProfile(id))
            } else {
                Ok(id)
            }
        }
    }
}

/// Write `chord` into `slot` of `action`'s binding.
///
/// Validation order matters: reserved keys are rejected before the
/// duplicate probe, so binding `Escape` reports `ReservedKey` rather than a
/// collision with the reserved `unfocus` binding.
pub fn bind_slot(
    snapshot: &mut ProfilesSnapshot,
    scope: BindScope,
    action: &str,
    slot: usize,
    chord: KeyChord,
) -> Result<(), BindError> {
    if slot >= SLOT_COUNT {
        return Err(BindError::InvalidSlot(slot));
    }
    if is_reserved_key(chord.key) {
        return Err(BindError::ReservedKey(chord.key));
    }
    if let Some(existing) = resolve(snapshot, &chord)
        && existing != action
    {
        return Err(BindError::DuplicateBinding {
            chord,
            action: existing.to_string(),
        });
    }
    let id = target_id(snapshot, scope)?;
    let profile = snapshot
        .profile_mut(id)
        .ok_or(BindError::InvalidProfile(id))?;

    profile.binding_entry(action).set_slot(slot, chord);
    log::info!("bound {chord} -> '{action}' (slot {slot}) in profile '{id}'");
    Ok(())
}

/// Empty `slot` of `action`'s binding. When every slot of the action ends
/// up empty, the entry is removed from the profile entirely — no empty
/// placeholder survives.
pub fn clear_slot(
    snapshot: &mut ProfilesSnapshot,
    scope: BindScope,
    action: &str,
    slot: usize,
) -> Result<(), BindError> {
    if slot >= SLOT_COUNT {
        return Err(BindError::InvalidSlot(slot));
    }
    let id = target_id(snapshot, scope)?;
    let profile = snapshot
        .profile_mut(id)
        .ok_or(BindError::InvalidProfile(id))?;

    let Some(binding) = profile.binding_mut(action) else {
        return Ok(());
    };
    binding.clear_slot(slot);
    if binding.is_empty() {
        profile.remove(action);
        log::info!("cleared last chord of '{action}', removing entry from '{id}'");
    }
    Ok(())
}
