//! Typed error types for the profile store.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the persisted profile store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Persisted data exists but cannot be understood (unparseable JSON, or
    /// an unknown schema version). Callers recover by reseeding defaults;
    /// [`crate::ProfileStore::open_at`] does this automatically.
    #[error("corrupt keybind store at {path:?}: {reason}")]
    CorruptState { path: PathBuf, reason: String },

    /// A profile id that does not exist or cannot be made active.
    /// Programmer error — the configuration surface only offers valid ids.
    #[error("invalid profile id '{0}'")]
    InvalidProfile(String),

    /// Underlying file I/O failure.
    #[error("keybind store I/O failed")]
    Io(#[from] std::io::Error),
}
