//! Selection cursor.
//!
//! At most one element is selected across both universes. Every mutation
//! goes through the cursor and comes back as a [`SelectionChange`] for the
//! host to apply (highlight classes, scrolling); the cursor never touches
//! the DOM itself.

use crate::geometry::Viewport;
use crate::spatial::{Candidate, Universe};

/// How the host should bring a newly selected element into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Smooth scroll, centering the element (direct user navigation).
    Smooth,
    /// Instant snap to the nearest edge (non-interactive restore).
    Snap,
}

/// Effect of one selection move, applied atomically by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    /// Element to deselect first, if any.
    pub deselect: Option<String>,
    /// Element to mark selected.
    pub select: String,
    pub universe: Universe,
    /// Present only when the element sits outside the visibility band.
    pub scroll: Option<ScrollRequest>,
}

/// The single selection cursor, plus the last-selected id remembered for
/// restoration on the next visit.
#[derive(Debug, Clone, Default)]
pub struct SelectionCursor {
    selected: Option<(Universe, String)>,
    last_selected: Option<String>,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<(Universe, &str)> {
        self.selected
            .as_ref()
            .map(|(universe, id)| (*universe, id.as_str()))
    }

    pub fn last_selected(&self) -> Option<&str> {
        self.last_selected.as_deref()
    }

    /// Select `candidate`, deselecting any previous element first.
    pub fn select(
        &mut self,
        universe: Universe,
        candidate: &Candidate,
        viewport: &Viewport,
        request: ScrollRequest,
    ) -> SelectionChange {
        let deselect = self.selected.take().map(|(_, id)| id);
        self.selected = Some((universe, candidate.id.clone()));
        self.last_selected = Some(candidate.id.clone());

        let scroll = (!viewport.is_visible(&candidate.bounds)).then_some(request);
        SelectionChange {
            deselect,
            select: candidate.id.clone(),
            universe,
            scroll,
        }
    }

    /// Drop the selection, returning the id the host should deselect.
    /// The last-selected id is kept — that is what restore works from.
    pub fn clear(&mut self) -> Option<String> {
        self.selected.take().map(|(_, id)| id)
    }
}
