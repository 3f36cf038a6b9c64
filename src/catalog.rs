//! The standard action catalog: ids, display names, flags.
//!
//! Handlers are host-supplied; this table keeps ids and flags in one place
//! so the seeded bindings in `gridnav-config::defaults`, the settings
//! surface, and host registrations agree. Entries with `name: None` are the
//! reserved actions — functional but never shown as a settings row.

use crate::actions::ActionFlags;

/// One standard catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: Option<&'static str>,
    pub flags: ActionFlags,
}

const DEFAULT: ActionFlags = ActionFlags {
    constant: false,
    repeat: false,
    input: false,
    global: false,
};

const SCROLL: ActionFlags = ActionFlags {
    constant: true,
    repeat: true,
    input: false,
    global: false,
};

const INPUT: ActionFlags = ActionFlags {
    constant: false,
    repeat: false,
    input: true,
    global: false,
};

const GLOBAL: ActionFlags = ActionFlags {
    constant: false,
    repeat: false,
    input: false,
    global: true,
};

/// The standard catalog, in settings-row order.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry { id: "scroll_up", name: Some("Scroll up"), flags: SCROLL },
    CatalogEntry { id: "scroll_down", name: Some("Scroll down"), flags: SCROLL },
    CatalogEntry { id: "scroll_left", name: Some("Scroll left"), flags: SCROLL },
    CatalogEntry { id: "scroll_right", name: Some("Scroll right"), flags: SCROLL },
    CatalogEntry {
        id: "toggle_keyboard_nav",
        name: Some("Toggle keyboard navigation mode"),
        flags: DEFAULT,
    },
    CatalogEntry { id: "open_selected", name: Some("Open selected image"), flags: DEFAULT },
    CatalogEntry {
        id: "open_in_new_tab",
        name: Some("Open selected image in new tab"),
        flags: DEFAULT,
    },
    CatalogEntry { id: "prev", name: Some("Previous page/image"), flags: DEFAULT },
    CatalogEntry { id: "next", name: Some("Next page/image"), flags: DEFAULT },
    CatalogEntry { id: "source", name: Some("Open source URL"), flags: DEFAULT },
    CatalogEntry { id: "random", name: Some("Random image"), flags: DEFAULT },
    CatalogEntry { id: "upvote", name: Some("Upvote image"), flags: DEFAULT },
    CatalogEntry { id: "favorite", name: Some("Favourite image"), flags: DEFAULT },
    CatalogEntry {
        id: "to_index",
        name: Some("Go to index page containing the image being displayed"),
        flags: DEFAULT,
    },
    CatalogEntry { id: "tag_edit", name: Some("Open tags for editing"), flags: DEFAULT },
    CatalogEntry { id: "tag_submit", name: Some("Save tags"), flags: INPUT },
    CatalogEntry {
        id: "toggle_scale",
        name: Some("Cycle through image scaling"),
        flags: DEFAULT,
    },
    CatalogEntry { id: "toggle_sound", name: Some("Mute/unmute videos"), flags: DEFAULT },
    CatalogEntry { id: "focus_search", name: Some("Focus on search field"), flags: DEFAULT },
    CatalogEntry { id: "focus_comment", name: Some("Focus on comment form"), flags: DEFAULT },
    CatalogEntry {
        id: "refresh_comments",
        name: Some("Refresh comment list"),
        flags: DEFAULT,
    },
    CatalogEntry {
        id: "history_back",
        name: Some("Go back in browser history"),
        flags: DEFAULT,
    },
    CatalogEntry {
        id: "history_forward",
        name: Some("Go forward in browser history"),
        flags: DEFAULT,
    },
    CatalogEntry {
        id: "use_default",
        name: Some("Global: Switch to default keybinds"),
        flags: GLOBAL,
    },
    CatalogEntry { id: "use_preset_1", name: Some("Global: Switch to preset 1"), flags: GLOBAL },
    CatalogEntry { id: "use_preset_2", name: Some("Global: Switch to preset 2"), flags: GLOBAL },
    CatalogEntry { id: "use_preset_3", name: Some("Global: Switch to preset 3"), flags: GLOBAL },
    CatalogEntry { id: "unfocus", name: None, flags: INPUT },
    CatalogEntry { id: "toggle_settings", name: None, flags: DEFAULT },
];

/// Look up a standard entry by id.
pub fn entry(id: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_actions_run_constant_and_repeat() {
        let scroll_up = entry("scroll_up").unwrap();
        assert!(scroll_up.flags.constant);
        assert!(scroll_up.flags.repeat);
    }

    #[test]
    fn reserved_actions_are_unnamed() {
        assert!(entry("unfocus").unwrap().name.is_none());
        assert!(entry("toggle_settings").unwrap().name.is_none());
        assert!(entry("unfocus").unwrap().flags.input);
    }

    #[test]
    fn preset_switchers_are_global() {
        for id in ["use_default", "use_preset_1", "use_preset_2", "use_preset_3"] {
            assert!(entry(id).unwrap().flags.global, "{id} must be global");
        }
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
