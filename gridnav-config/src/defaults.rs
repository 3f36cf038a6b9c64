//! Seed binding tables for first run.
//!
//! The shipped layout: `default` mirrors the site's stock single-key
//! shortcuts, `preset_1` is a WASD-centric layout with scrolling and cursor
//! navigation, `preset_2`/`preset_3` start empty, `global` carries the
//! preset-switch chords, and `reserved` holds the fixed escape hatches.

use crate::chord::KeyChord;
use crate::profile::{Binding, Profile};
use crate::snapshot::Keybinds;
use winit::keyboard::KeyCode;

fn single(key: KeyCode) -> Binding {
    Binding::single(KeyChord::new(key))
}

fn single_shift(key: KeyCode) -> Binding {
    Binding::single(KeyChord::new(key).with_shift())
}

fn single_alt(key: KeyCode) -> Binding {
    Binding::single(KeyChord::new(key).with_alt())
}

fn pair(first: KeyCode, second: KeyCode) -> Binding {
    Binding::pair(KeyChord::new(first), KeyChord::new(second))
}

/// The seeded profile set.
pub fn keybinds() -> Keybinds {
    let mut default = Profile::new();
    default.insert("prev", single(KeyCode::KeyJ));
    default.insert("next", single(KeyCode::KeyK));
    default.insert("source", single(KeyCode::KeyS));
    default.insert("random", single(KeyCode::KeyR));
    default.insert("upvote", single(KeyCode::KeyU));
    default.insert("favorite", single(KeyCode::KeyF));
    default.insert("to_index", single(KeyCode::KeyI));
    default.insert("tag_edit", single(KeyCode::KeyL));

    let mut preset_1 = Profile::new();
    preset_1.insert("scroll_up", pair(KeyCode::KeyW, KeyCode::ArrowUp));
    preset_1.insert("scroll_down", pair(KeyCode::KeyS, KeyCode::ArrowDown));
    preset_1.insert("scroll_left", pair(KeyCode::KeyA, KeyCode::ArrowLeft));
    preset_1.insert("scroll_right", pair(KeyCode::KeyD, KeyCode::ArrowRight));
    preset_1.insert("toggle_keyboard_nav", single(KeyCode::KeyQ));
    preset_1.insert("open_selected", single(KeyCode::KeyE));
    preset_1.insert("open_in_new_tab", single_shift(KeyCode::KeyE));
    preset_1.insert("prev", single(KeyCode::KeyZ));
    preset_1.insert("next", single(KeyCode::KeyX));
    preset_1.insert("random", single(KeyCode::KeyR));
    preset_1.insert("upvote", single_shift(KeyCode::KeyG));
    preset_1.insert("favorite", single_shift(KeyCode::KeyF));
    preset_1.insert("tag_edit", single(KeyCode::KeyL));
    preset_1.insert("toggle_scale", single(KeyCode::KeyV));
    preset_1.insert("toggle_sound", single(KeyCode::KeyM));
    preset_1.insert("focus_search", single_shift(KeyCode::KeyS));
    preset_1.insert("focus_comment", single_shift(KeyCode::KeyC));
    preset_1.insert("refresh_comments", single_shift(KeyCode::KeyR));
    preset_1.insert("history_back", single_shift(KeyCode::KeyA));
    preset_1.insert("history_forward", single_shift(KeyCode::KeyD));

    let mut global = Profile::new();
    global.insert("use_default", single_alt(KeyCode::Backquote));
    global.insert("use_preset_1", single_alt(KeyCode::Digit1));
    global.insert("use_preset_2", single_alt(KeyCode::Digit2));
    global.insert("use_preset_3", single_alt(KeyCode::Digit3));

    Keybinds {
        default,
        preset_1,
        preset_2: Profile::new(),
        preset_3: Profile::new(),
        global,
    }
}

/// The fixed reserved bindings: drop focus, and open/close the settings
/// surface.
pub(crate) fn reserved() -> Profile {
    let mut reserved = Profile::new();
    reserved.insert("unfocus", single(KeyCode::Escape));
    reserved.insert(
        "toggle_settings",
        Binding::single(KeyChord::new(KeyCode::Slash).with_ctrl().with_shift()),
    );
    reserved
}
