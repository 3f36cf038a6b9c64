//! Action catalog plumbing.
//!
//! The catalog itself is host-owned: the host registers each action with a
//! handler and flags, and the dispatcher consults the registry. Entries
//! without a display name are non-configurable — the settings surface shows
//! no row for them.

use crate::dispatch::KeyInput;
use std::fmt;

/// Result of running one action handler. `Some(override)` lets the handler
/// take precedence over the default suppression flags.
pub type HandlerResult = anyhow::Result<Option<DispatchOverride>>;

type Handler<C> = Box<dyn FnMut(&KeyInput, &mut C) -> HandlerResult>;

/// Behavior flags for an action, consulted by the dispatcher's guards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionFlags {
    /// Run on both key-down and key-up.
    pub constant: bool,
    /// Run on auto-repeated key-downs.
    pub repeat: bool,
    /// Run while a text-input-like element has focus.
    pub input: bool,
    /// Bindings live in the `global` profile, active under every preset.
    pub global: bool,
}

/// A handler's explicit say over the dispatch verdict. `None` fields keep
/// the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOverride {
    pub stop_propagation: Option<bool>,
    pub prevent_default: Option<bool>,
}

impl DispatchOverride {
    pub fn prevent_default(value: bool) -> Option<Self> {
        Some(Self {
            stop_propagation: None,
            prevent_default: Some(value),
        })
    }

    pub fn stop_propagation(value: bool) -> Option<Self> {
        Some(Self {
            stop_propagation: Some(value),
            prevent_default: None,
        })
    }
}

/// One catalog entry: optional display name, flags, handler.
pub struct Action<C> {
    display_name: Option<String>,
    flags: ActionFlags,
    handler: Handler<C>,
}

impl<C> Action<C> {
    /// Unnamed (non-configurable) action with default flags.
    pub fn new(handler: impl FnMut(&KeyInput, &mut C) -> HandlerResult + 'static) -> Self {
        Self {
            display_name: None,
            flags: ActionFlags::default(),
            handler: Box::new(handler),
        }
    }

    /// Named action, shown in the settings surface.
    pub fn named(
        name: impl Into<String>,
        handler: impl FnMut(&KeyInput, &mut C) -> HandlerResult + 'static,
    ) -> Self {
        Self {
            display_name: Some(name.into()),
            flags: ActionFlags::default(),
            handler: Box::new(handler),
        }
    }

    pub fn with_flags(mut self, flags: ActionFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn flags(&self) -> ActionFlags {
        self.flags
    }

    pub(crate) fn run(&mut self, input: &KeyInput, cx: &mut C) -> HandlerResult {
        (self.handler)(input, cx)
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("display_name", &self.display_name)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// Host-populated action catalog.
///
/// Backed by a vector rather than a hash map so the settings surface lists
/// configurable actions in registration order. Lookup is linear; the
/// catalog stays small.
#[derive(Debug)]
pub struct ActionRegistry<C> {
    actions: Vec<(String, Action<C>)>,
}

impl<C> Default for ActionRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ActionRegistry<C> {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Register `action` under `id`, replacing any earlier entry.
    pub fn register(&mut self, id: impl Into<String>, action: Action<C>) {
        let id = id.into();
        if let Some(slot) = self.actions.iter_mut().find(|(existing, _)| *existing == id) {
            log::debug!("replacing action registration '{id}'");
            slot.1 = action;
        } else {
            self.actions.push((id, action));
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.actions.iter().any(|(existing, _)| existing == id)
    }

    pub fn get(&self, id: &str) -> Option<&Action<C>> {
        self.actions
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, action)| action)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Action<C>> {
        self.actions
            .iter_mut()
            .find(|(existing, _)| existing == id)
            .map(|(_, action)| action)
    }

    pub fn flags(&self, id: &str) -> Option<ActionFlags> {
        self.get(id).map(Action::flags)
    }

    /// Entries with a display name, in registration order — the rows the
    /// settings surface renders.
    pub fn configurable(&self) -> impl Iterator<Item = (&str, &str, ActionFlags)> {
        self.actions.iter().filter_map(|(id, action)| {
            action
                .display_name()
                .map(|name| (id.as_str(), name, action.flags()))
        })
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
