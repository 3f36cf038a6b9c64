//! Profile store persistence.
//!
//! Covers:
//! - `load` / `save` (JSON file I/O with atomic write)
//! - first-run seeding and corrupt-state reseeding
//! - active-profile get/set and preset switching

use crate::error::StoreError;
use crate::profile::ProfileId;
use crate::snapshot::{ProfilesSnapshot, SCHEMA_VERSION};
use std::fs;
use std::path::{Path, PathBuf};

/// The persisted keybind profiles and the active profile id.
///
/// Single-threaded by design: reads and writes happen from the main
/// event-handling flow only, so read-modify-write sequences need no locking.
#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    snapshot: ProfilesSnapshot,
}

impl ProfileStore {
    /// Open the store at the default location, seeding defaults on first
    /// run and reseeding (with a warning) on corrupt state.
    pub fn open() -> Result<Self, StoreError> {
        Self::open_at(Self::store_path())
    }

    /// Open the store at `path` with the same seeding/reseeding policy.
    pub fn open_at(path: PathBuf) -> Result<Self, StoreError> {
        let snapshot = if path.exists() {
            match Self::load(&path) {
                Ok(snapshot) => snapshot,
                Err(err @ StoreError::CorruptState { .. }) => {
                    log::warn!("{err}; reseeding defaults");
                    let snapshot = ProfilesSnapshot::seeded();
                    write_snapshot(&path, &snapshot)?;
                    snapshot
                }
                Err(err) => return Err(err),
            }
        } else {
            log::info!("keybind store not found, creating default at {path:?}");
            let snapshot = ProfilesSnapshot::seeded();
            write_snapshot(&path, &snapshot)?;
            snapshot
        };

        Ok(Self { path, snapshot })
    }

    /// Read a snapshot from `path` without any recovery: a missing file
    /// yields the seeded snapshot, unreadable or version-mismatched data
    /// yields [`StoreError::CorruptState`].
    pub fn load(path: &Path) -> Result<ProfilesSnapshot, StoreError> {
        if !path.exists() {
            log::info!("no keybind store at {path:?}, using seeded defaults");
            return Ok(ProfilesSnapshot::seeded());
        }

        let contents = fs::read_to_string(path)?;
        let mut snapshot: ProfilesSnapshot =
            serde_json::from_str(&contents).map_err(|err| StoreError::CorruptState {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;

        if snapshot.schema_version != SCHEMA_VERSION {
            return Err(StoreError::CorruptState {
                path: path.to_path_buf(),
                reason: format!(
                    "unsupported schema version {} (expected {SCHEMA_VERSION})",
                    snapshot.schema_version
                ),
            });
        }
        if !snapshot.use_preset.is_selectable() {
            return Err(StoreError::CorruptState {
                path: path.to_path_buf(),
                reason: format!("'{}' is not a selectable profile", snapshot.use_preset),
            });
        }

        snapshot.normalize();
        log::debug!("loaded keybind store from {path:?}");
        Ok(snapshot)
    }

    /// Write the snapshot to disk synchronously. Visible to subsequent
    /// loads as soon as this returns.
    pub fn save(&self) -> Result<(), StoreError> {
        write_snapshot(&self.path, &self.snapshot)
    }

    pub fn snapshot(&self) -> &ProfilesSnapshot {
        &self.snapshot
    }

    pub fn snapshot_mut(&mut self) -> &mut ProfilesSnapshot {
        &mut self.snapshot
    }

    pub fn active_profile(&self) -> ProfileId {
        self.snapshot.use_preset
    }

    /// Make `id` the active profile. Only selectable profiles qualify;
    /// `global` and `reserved` are rejected with
    /// [`StoreError::InvalidProfile`].
    pub fn set_active_profile(&mut self, id: ProfileId) -> Result<(), StoreError> {
        if !id.is_selectable() {
            return Err(StoreError::InvalidProfile(id.as_str().to_string()));
        }
        self.snapshot.use_preset = id;
        Ok(())
    }

    /// Switch the active preset and persist immediately — the path taken by
    /// the global `use_*` actions.
    pub fn switch_preset(&mut self, id: ProfileId) -> Result<(), StoreError> {
        self.set_active_profile(id)?;
        self.save()?;
        log::info!("switched active keybind profile to '{id}'");
        Ok(())
    }

    /// Default store location, e.g. `~/.config/gridnav/keybinds.json`.
    pub fn store_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gridnav")
            .join("keybinds.json")
    }
}

/// Atomic save: write to a temp file then rename, so a crash mid-write
/// cannot leave a truncated store behind.
fn write_snapshot(path: &Path, snapshot: &ProfilesSnapshot) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(snapshot).map_err(|err| StoreError::CorruptState {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &json)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
