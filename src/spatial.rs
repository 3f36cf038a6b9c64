//! Spatial navigation over candidate elements.
//!
//! Candidates arrive per lookup as ordered slices (document order) with live
//! viewport-relative geometry. Two disjoint universes exist — media tiles
//! and tag entries — and a step never crosses between them.

use crate::geometry::{Bounds, Viewport};

/// Which candidate universe an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Universe {
    MediaTile,
    TagEntry,
}

/// Direction of a navigation or scroll input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One navigable element, identified by a host-side id (e.g. an image id).
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub bounds: Bounds,
}

impl Candidate {
    pub fn new(id: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }
}

/// Both candidate universes for one lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    pub tiles: Vec<Candidate>,
    pub tags: Vec<Candidate>,
}

impl CandidateSet {
    pub fn universe(&self, universe: Universe) -> &[Candidate] {
        match universe {
            Universe::MediaTile => &self.tiles,
            Universe::TagEntry => &self.tags,
        }
    }

    /// Find `id` in either universe, tiles first.
    pub fn find(&self, id: &str) -> Option<(Universe, &Candidate)> {
        for universe in [Universe::MediaTile, Universe::TagEntry] {
            if let Some(candidate) = self.universe(universe).iter().find(|c| c.id == id) {
                return Some((universe, candidate));
            }
        }
        None
    }

    /// Index of `id` within one universe.
    pub fn position(&self, universe: Universe, id: &str) -> Option<usize> {
        self.universe(universe).iter().position(|c| c.id == id)
    }
}

/// Vertical slack when deciding whether two elements share a row.
fn row_margin(current: &Bounds) -> f64 {
    (current.height / 4.0).max(4.0)
}

/// First candidate visible in the viewport's center band, else the one
/// whose center is closest to the viewport's vertical middle. Empty set →
/// `None`.
pub fn find_entry_point<'a>(
    candidates: &'a [Candidate],
    viewport: &Viewport,
) -> Option<&'a Candidate> {
    let viewport_mid = viewport.height / 2.0;
    let mut closest: Option<(&Candidate, f64)> = None;

    for candidate in candidates {
        if viewport.is_visible(&candidate.bounds) {
            return Some(candidate);
        }
        let delta = (candidate.bounds.center_y() - viewport_mid).abs();
        match closest {
            Some((_, best)) if delta >= best => {}
            _ => closest = Some((candidate, delta)),
        }
    }

    closest.map(|(candidate, _)| candidate)
}

/// Step from the candidate at `current` in `direction`.
///
/// Left/right move by document order and clamp at the ends (`None` means no
/// movement, not a wrap). Up/down skip candidates in the current row and
/// pick the Euclidean-closest member of the nearest differing row; equal
/// distances keep the first encountered in scan order.
pub fn step<'a>(
    candidates: &'a [Candidate],
    current: usize,
    direction: Direction,
) -> Option<&'a Candidate> {
    let origin = candidates.get(current)?;
    match direction {
        Direction::Left => current.checked_sub(1).and_then(|i| candidates.get(i)),
        Direction::Right => candidates.get(current + 1),
        Direction::Up => nearest_in_adjacent_row(origin, candidates[..current].iter().rev()),
        Direction::Down => nearest_in_adjacent_row(origin, candidates[current + 1..].iter()),
    }
}

/// Scan away from `origin`, skip its own row, and return the closest member
/// of the first differing row. Scanning stops at the first candidate whose
/// vertical offset exceeds that row's — rows further out never win.
fn nearest_in_adjacent_row<'a>(
    origin: &Candidate,
    scan: impl Iterator<Item = &'a Candidate>,
) -> Option<&'a Candidate> {
    let margin = row_margin(&origin.bounds);
    let origin_y = origin.bounds.center_y();

    let mut target_row_y: Option<f64> = None;
    let mut best: Option<(&'a Candidate, f64)> = None;

    for candidate in scan {
        let y = candidate.bounds.center_y();
        let offset = (y - origin_y).abs();
        if offset <= margin {
            continue; // origin's own row
        }

        match target_row_y {
            Some(row_y) if (y - row_y).abs() <= margin => {
                let distance = origin.bounds.center_distance(&candidate.bounds);
                if let Some((_, best_distance)) = best
                    && distance < best_distance
                {
                    best = Some((candidate, distance));
                }
            }
            Some(row_y) if offset > (row_y - origin_y).abs() => break,
            _ => {
                // first differing row seen, or one nearer than the held row
                target_row_y = Some(y);
                best = Some((candidate, origin.bounds.center_distance(&candidate.bounds)));
            }
        }
    }

    best.map(|(candidate, _)| candidate)
}
