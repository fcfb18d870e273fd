//! Scroll-reveal: adds `visible` to `.animate-on-scroll` elements the first
//! time enough of them enters the viewport.
//!
//! Observed elements are tracked by path, so any render that rebuilds a
//! container invalidates them. Call [`ScrollReveal::arm`] again afterwards.

use crate::view::document::{Document, NodePath};

pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
/// Fraction of an element that must be visible.
pub const THRESHOLD: f64 = 0.1;
/// The viewport's bottom edge is pulled up by this much.
pub const BOTTOM_MARGIN: f64 = 50.0;

/// Viewport-relative vertical extent of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, bottom: top + height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub height: f64,
}

/// Share of `rect` inside `[0, viewport.height - BOTTOM_MARGIN]`.
pub fn visible_ratio(rect: Rect, viewport: Viewport) -> f64 {
    let floor = 0.0;
    let ceiling = (viewport.height - BOTTOM_MARGIN).max(floor);
    let height = rect.bottom - rect.top;
    if height <= 0.0 {
        return if rect.top >= floor && rect.top <= ceiling { 1.0 } else { 0.0 };
    }
    let overlap = rect.bottom.min(ceiling) - rect.top.max(floor);
    (overlap / height).clamp(0.0, 1.0)
}

#[derive(Debug, Default)]
pub struct ScrollReveal {
    observed: Vec<NodePath>,
}

impl ScrollReveal {
    /// (Re)collects every element still waiting to be revealed.
    pub fn arm(&mut self, doc: &Document) -> usize {
        self.observed = doc
            .find_all_paths(REVEAL_SELECTOR)
            .into_iter()
            .filter(|p| doc.at_path(p).is_some_and(|e| !e.has_class("visible")))
            .collect();
        self.observed.len()
    }

    pub fn observed(&self) -> usize {
        self.observed.len()
    }

    /// Reveals observed elements that cross the threshold and stops watching
    /// them. Elements with no known geometry stay observed. Returns how many
    /// were revealed.
    pub fn observe<G>(&mut self, doc: &mut Document, viewport: Viewport, geometry: G) -> usize
    where
        G: Fn(&[usize]) -> Option<Rect>,
    {
        let mut revealed = 0;
        self.observed.retain(|path| {
            let Some(rect) = geometry(path) else {
                return true;
            };
            if visible_ratio(rect, viewport) < THRESHOLD {
                return true;
            }
            if doc.update_at(path, |e| e.add_class("visible")) {
                revealed += 1;
            }
            false
        });
        revealed
    }
}
