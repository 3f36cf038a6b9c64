//! Keyboard-driven navigation engine for media gallery grids.
//!
//! Two tightly coupled engines and their glue:
//! - **keybind resolution**: a raw key event plus modifier state maps to a
//!   named action under the active configuration profile, merged with the
//!   global and reserved profiles (`gridnav-keybindings`)
//! - **spatial navigation**: a selection cursor moves across on-screen
//!   elements by geometric proximity rather than document order
//!   ([`spatial`], [`cursor`])
//! - the [`dispatch`]er routes raw input through resolution to the bound
//!   action and answers with a suppression verdict; the [`nav`] controller
//!   decides between cursor stepping and continuous [`scroller`] scrolling
//!
//! The engine is headless: the host feeds it events and live geometry and
//! applies the returned effects (highlight changes, scroll deltas, event
//! suppression). Profiles persist through `gridnav-config`'s
//! [`ProfileStore`](config::ProfileStore).

pub mod actions;
pub mod catalog;
pub mod cursor;
pub mod dispatch;
pub mod geometry;
pub mod nav;
pub mod scroller;
pub mod spatial;

pub use gridnav_config as config;
pub use gridnav_keybindings as keybindings;

pub use actions::{Action, ActionFlags, ActionRegistry, DispatchOverride};
pub use catalog::{CATALOG, CatalogEntry};
pub use cursor::{ScrollRequest, SelectionChange, SelectionCursor};
pub use dispatch::{Dispatch, Dispatcher, FocusContext, KeyInput, KeyPhase};
pub use geometry::{Bounds, Viewport};
pub use nav::{NavController, NavEffect};
pub use scroller::{FrameOutcome, ScrollDelta, SmoothScroller};
pub use spatial::{Candidate, CandidateSet, Direction, Universe, find_entry_point, step};
