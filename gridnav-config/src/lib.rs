//! Persisted keybind configuration for gridnav.
//!
//! Data model (chords, bindings, profiles), the seeded default binding
//! tables, and the JSON-backed [`ProfileStore`].
//!
//! Chords are keyed by physical key code (`winit::keyboard::KeyCode`), not
//! by produced character, so a binding made on QWERTY stays on the same
//! physical key under any layout.

pub mod chord;
pub mod defaults;
mod error;
pub mod profile;
mod snapshot;
mod store;

pub use chord::{KeyChord, key_label};
pub use error::StoreError;
pub use profile::{Binding, Profile, ProfileId, SLOT_COUNT};
pub use snapshot::{Keybinds, ProfilesSnapshot, SCHEMA_VERSION, reserved_profile};
pub use store::ProfileStore;
