//! Navigation controller: couples the selection cursor, spatial stepping,
//! and the smooth scroller.
//!
//! One rule governs directional input: a key-down is either a cursor step
//! (when something is selected) or continuous scrolling (when nothing is),
//! decided at the moment of the key-down. Key-ups always reach the scroller
//! so held-axis flags cannot stick.

use crate::cursor::{ScrollRequest, SelectionChange, SelectionCursor};
use crate::dispatch::{KeyInput, KeyPhase};
use crate::geometry::Viewport;
use crate::scroller::SmoothScroller;
use crate::spatial::{self, CandidateSet, Direction, Universe};

/// What the host must apply after a navigation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEffect {
    /// Nothing to do.
    None,
    /// Apply a selection change (deselect/select/scroll-into-view).
    Select(SelectionChange),
    /// Remove the selection highlight from this element.
    Deselect(String),
    /// Start the frame loop: call [`SmoothScroller::frame`] every display
    /// refresh until it returns `Stop`.
    StartScrolling,
}

/// Owns the cursor and the scroller and routes directional input between
/// them.
#[derive(Debug)]
pub struct NavController {
    pub cursor: SelectionCursor,
    pub scroller: SmoothScroller,
}

impl NavController {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            cursor: SelectionCursor::new(),
            scroller: SmoothScroller::new(scale_factor),
        }
    }

    /// Directional input from one of the `scroll_*` actions.
    pub fn directional(
        &mut self,
        direction: Direction,
        input: &KeyInput,
        set: &CandidateSet,
        viewport: &Viewport,
    ) -> NavEffect {
        if input.phase == KeyPhase::Down
            && let Some((universe, id)) = self
                .cursor
                .selected()
                .map(|(universe, id)| (universe, id.to_owned()))
        {
            // cursor navigation takes over; release the scroller so its
            // pending frame winds down
            self.scroller.reset();
            return self.step_selection(universe, &id, direction, !input.repeat, set, viewport);
        }

        if input.repeat {
            return NavEffect::None;
        }
        match input.phase {
            KeyPhase::Down => {
                if self.scroller.key_down(direction) {
                    NavEffect::StartScrolling
                } else {
                    NavEffect::None
                }
            }
            KeyPhase::Up => {
                self.scroller.key_up(direction);
                NavEffect::None
            }
        }
    }

    fn step_selection(
        &mut self,
        universe: Universe,
        id: &str,
        direction: Direction,
        smooth: bool,
        set: &CandidateSet,
        viewport: &Viewport,
    ) -> NavEffect {
        let candidates = set.universe(universe);
        let Some(current) = set.position(universe, id) else {
            // the selected element left the page; drop the selection
            return match self.cursor.clear() {
                Some(old) => NavEffect::Deselect(old),
                None => NavEffect::None,
            };
        };

        match spatial::step(candidates, current, direction) {
            Some(next) => {
                let request = if smooth {
                    ScrollRequest::Smooth
                } else {
                    ScrollRequest::Snap
                };
                NavEffect::Select(self.cursor.select(universe, next, viewport, request))
            }
            // clamped at an edge: selection stays put
            None => NavEffect::None,
        }
    }

    /// Keyboard-nav toggle: clear when something is selected; otherwise
    /// restore the last-selected candidate if it is still present and
    /// visible, else select the entry point.
    pub fn toggle(&mut self, set: &CandidateSet, viewport: &Viewport) -> NavEffect {
        if let Some(old) = self.cursor.clear() {
            return NavEffect::Deselect(old);
        }

        if let Some(last) = self.cursor.last_selected().map(str::to_owned)
            && let Some((universe, candidate)) = set.find(&last)
            && viewport.is_visible(&candidate.bounds)
        {
            let candidate = candidate.clone();
            return NavEffect::Select(self.cursor.select(
                universe,
                &candidate,
                viewport,
                ScrollRequest::Smooth,
            ));
        }

        self.entry_point(set, viewport)
    }

    /// Non-interactive re-entry (page restore): reselect the last-selected
    /// candidate without animation.
    pub fn restore(&mut self, set: &CandidateSet, viewport: &Viewport) -> NavEffect {
        let Some(last) = self.cursor.last_selected().map(str::to_owned) else {
            return NavEffect::None;
        };
        match set.find(&last) {
            Some((universe, candidate)) => {
                let candidate = candidate.clone();
                NavEffect::Select(self.cursor.select(
                    universe,
                    &candidate,
                    viewport,
                    ScrollRequest::Snap,
                ))
            }
            None => NavEffect::None,
        }
    }

    /// Page-unload equivalent: drop the highlight (keeping the
    /// last-selected id) and stop any running scroll.
    pub fn page_hidden(&mut self) -> NavEffect {
        self.scroller.reset();
        match self.cursor.clear() {
            Some(old) => NavEffect::Deselect(old),
            None => NavEffect::None,
        }
    }

    fn entry_point(&mut self, set: &CandidateSet, viewport: &Viewport) -> NavEffect {
        for universe in [Universe::MediaTile, Universe::TagEntry] {
            if let Some(candidate) = spatial::find_entry_point(set.universe(universe), viewport) {
                let candidate = candidate.clone();
                return NavEffect::Select(self.cursor.select(
                    universe,
                    &candidate,
                    viewport,
                    ScrollRequest::Smooth,
                ));
            }
        }
        NavEffect::None
    }
}
