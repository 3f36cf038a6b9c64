//! Raw event → resolve → dispatch pipeline.
//!
//! The suppression verdict (stop propagation / prevent default) is the
//! return value, and the host applies it to the real event. Nothing here
//! touches globals, so the capture-phase behavior is testable on its own.

use crate::actions::ActionRegistry;
use gridnav_config::{KeyChord, ProfilesSnapshot};
use gridnav_keybindings::resolve;
use winit::keyboard::KeyCode;

/// Key transition of an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Down,
    Up,
}

/// Where input focus sits when the event fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusContext {
    /// No text-entry element focused.
    #[default]
    Page,
    /// A text-input-like element has focus.
    TextInput,
    /// Focus is inside the settings surface; actions never fire here.
    Settings,
}

/// A raw keyboard event, as the host's capture listener saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: KeyCode,
    pub phase: KeyPhase,
    /// Auto-repeat from the key being held.
    pub repeat: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub focus: FocusContext,
}

impl KeyInput {
    pub fn down(key: KeyCode) -> Self {
        Self {
            key,
            phase: KeyPhase::Down,
            repeat: false,
            ctrl: false,
            alt: false,
            shift: false,
            focus: FocusContext::Page,
        }
    }

    pub fn up(key: KeyCode) -> Self {
        Self {
            phase: KeyPhase::Up,
            ..Self::down(key)
        }
    }

    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_focus(mut self, focus: FocusContext) -> Self {
        self.focus = focus;
        self
    }

    /// The chord this event forms.
    pub fn chord(&self) -> KeyChord {
        KeyChord {
            key: self.key,
            ctrl: self.ctrl,
            alt: self.alt,
            shift: self.shift,
        }
    }
}

/// Dispatch verdict for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    /// Stop the event from reaching the host page's own handlers.
    pub stop_propagation: bool,
    /// Suppress the browser's default behavior for the key.
    pub prevent_default: bool,
}

/// Routes raw input through resolution to the bound action.
pub struct Dispatcher<C> {
    registry: ActionRegistry<C>,
}

impl<C> Dispatcher<C> {
    pub fn new(registry: ActionRegistry<C>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ActionRegistry<C> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ActionRegistry<C> {
        &mut self.registry
    }

    /// Handle one raw key event.
    ///
    /// Unresolved chords never block default browser behavior, so native
    /// shortcuts like Ctrl+F keep working; whether propagation stops still
    /// depends on the focus target. Resolved actions run only when every
    /// guard passes: key-down (or a `constant` action), not an auto-repeat
    /// (unless `repeat`), no text focus (unless `input`), and never inside
    /// the settings surface. A handler may override either verdict flag;
    /// handler failures are logged and keep the defaults.
    pub fn handle(
        &mut self,
        snapshot: &ProfilesSnapshot,
        input: &KeyInput,
        cx: &mut C,
    ) -> Dispatch {
        let action_id =
            resolve(snapshot, &input.chord()).filter(|id| self.registry.contains(id));

        let mut verdict = Dispatch {
            stop_propagation: true,
            prevent_default: action_id.is_some(),
        };
        if input.focus != FocusContext::Page {
            verdict.stop_propagation = false;
            verdict.prevent_default = false;
        }

        let Some(id) = action_id else {
            return verdict;
        };
        let Some(action) = self.registry.get_mut(id) else {
            return verdict;
        };

        let flags = action.flags();
        let eligible = (flags.constant || input.phase == KeyPhase::Down)
            && (flags.repeat || !input.repeat)
            && (flags.input || input.focus != FocusContext::TextInput)
            && input.focus != FocusContext::Settings;
        if !eligible {
            return verdict;
        }

        match action.run(input, cx) {
            Ok(Some(over)) => {
                if let Some(stop) = over.stop_propagation {
                    verdict.stop_propagation = stop;
                }
                if let Some(prevent) = over.prevent_default {
                    verdict.prevent_default = prevent;
                }
            }
            Ok(None) => {}
            Err(err) => {
                log::warn!("action '{id}' handler failed: {err:#}");
            }
        }

        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, ActionFlags, DispatchOverride};
    use gridnav_config::ProfilesSnapshot;

    #[derive(Default)]
    struct Counter {
        runs: u32,
    }

    fn counting_dispatcher(flags: ActionFlags) -> Dispatcher<Counter> {
        let mut registry = ActionRegistry::new();
        registry.register(
            "next",
            Action::named("Next page/image", |_input, cx: &mut Counter| {
                cx.runs += 1;
                Ok(None)
            })
            .with_flags(flags),
        );
        Dispatcher::new(registry)
    }

    #[test]
    fn resolved_keydown_runs_and_suppresses_default() {
        let snapshot = ProfilesSnapshot::seeded();
        let mut dispatcher = counting_dispatcher(ActionFlags::default());
        let mut cx = Counter::default();

        let verdict = dispatcher.handle(&snapshot, &KeyInput::down(KeyCode::KeyK), &mut cx);
        assert_eq!(cx.runs, 1);
        assert!(verdict.stop_propagation);
        assert!(verdict.prevent_default);
    }

    #[test]
    fn unresolved_chord_preserves_default_behavior() {
        let snapshot = ProfilesSnapshot::seeded();
        let mut dispatcher = counting_dispatcher(ActionFlags::default());
        let mut cx = Counter::default();

        let verdict = dispatcher.handle(&snapshot, &KeyInput::down(KeyCode::KeyZ), &mut cx);
        assert_eq!(cx.runs, 0);
        assert!(verdict.stop_propagation);
        assert!(!verdict.prevent_default);
    }

    #[test]
    fn resolved_action_missing_from_registry_is_no_match() {
        let snapshot = ProfilesSnapshot::seeded();
        // registry only knows "next"; KeyJ resolves to "prev"
        let mut dispatcher = counting_dispatcher(ActionFlags::default());
        let mut cx = Counter::default();

        let verdict = dispatcher.handle(&snapshot, &KeyInput::down(KeyCode::KeyJ), &mut cx);
        assert_eq!(cx.runs, 0);
        assert!(!verdict.prevent_default);
    }

    #[test]
    fn keyup_runs_only_constant_actions() {
        let snapshot = ProfilesSnapshot::seeded();
        let mut cx = Counter::default();

        let mut dispatcher = counting_dispatcher(ActionFlags::default());
        dispatcher.handle(&snapshot, &KeyInput::up(KeyCode::KeyK), &mut cx);
        assert_eq!(cx.runs, 0);

        let mut dispatcher = counting_dispatcher(ActionFlags {
            constant: true,
            ..ActionFlags::default()
        });
        dispatcher.handle(&snapshot, &KeyInput::up(KeyCode::KeyK), &mut cx);
        assert_eq!(cx.runs, 1);
    }

    #[test]
    fn repeats_run_only_repeat_actions() {
        let snapshot = ProfilesSnapshot::seeded();
        let mut cx = Counter::default();
        let repeat = KeyInput::down(KeyCode::KeyK).repeated();

        let mut dispatcher = counting_dispatcher(ActionFlags::default());
        dispatcher.handle(&snapshot, &repeat, &mut cx);
        assert_eq!(cx.runs, 0);

        let mut dispatcher = counting_dispatcher(ActionFlags {
            repeat: true,
            ..ActionFlags::default()
        });
        dispatcher.handle(&snapshot, &repeat, &mut cx);
        assert_eq!(cx.runs, 1);
    }

    #[test]
    fn text_focus_blocks_non_input_actions_and_clears_suppression() {
        let snapshot = ProfilesSnapshot::seeded();
        let mut cx = Counter::default();
        let input = KeyInput::down(KeyCode::KeyK).with_focus(FocusContext::TextInput);

        let mut dispatcher = counting_dispatcher(ActionFlags::default());
        let verdict = dispatcher.handle(&snapshot, &input, &mut cx);
        assert_eq!(cx.runs, 0);
        assert!(!verdict.stop_propagation);
        assert!(!verdict.prevent_default);

        let mut dispatcher = counting_dispatcher(ActionFlags {
            input: true,
            ..ActionFlags::default()
        });
        dispatcher.handle(&snapshot, &input, &mut cx);
        assert_eq!(cx.runs, 1);
    }

    #[test]
    fn settings_focus_blocks_every_action() {
        let snapshot = ProfilesSnapshot::seeded();
        let mut cx = Counter::default();
        let input = KeyInput::down(KeyCode::KeyK).with_focus(FocusContext::Settings);

        let mut dispatcher = counting_dispatcher(ActionFlags {
            input: true,
            constant: true,
            ..ActionFlags::default()
        });
        let verdict = dispatcher.handle(&snapshot, &input, &mut cx);
        assert_eq!(cx.runs, 0);
        assert!(!verdict.stop_propagation);
        assert!(!verdict.prevent_default);
    }

    #[test]
    fn handler_overrides_take_precedence() {
        let snapshot = ProfilesSnapshot::seeded();
        let mut registry = ActionRegistry::new();
        registry.register(
            "next",
            Action::named("Next page/image", |_input, _cx: &mut ()| {
                Ok(DispatchOverride::prevent_default(false))
            }),
        );
        let mut dispatcher = Dispatcher::new(registry);

        let verdict = dispatcher.handle(&snapshot, &KeyInput::down(KeyCode::KeyK), &mut ());
        assert!(verdict.stop_propagation);
        assert!(!verdict.prevent_default);
    }

    #[test]
    fn handler_errors_keep_default_verdict() {
        let snapshot = ProfilesSnapshot::seeded();
        let mut registry = ActionRegistry::new();
        registry.register(
            "next",
            Action::named("Next page/image", |_input, _cx: &mut ()| {
                Err(anyhow::anyhow!("host button missing"))
            }),
        );
        let mut dispatcher = Dispatcher::new(registry);

        let verdict = dispatcher.handle(&snapshot, &KeyInput::down(KeyCode::KeyK), &mut ());
        assert!(verdict.stop_propagation);
        assert!(verdict.prevent_default);
    }
}
