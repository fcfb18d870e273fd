//! Scroll-spy: highlights the nav link of the section currently in view.

use crate::view::document::Document;

/// A section counts as reached this many pixels before its top edge.
pub const SPY_OFFSET: f64 = 100.0;

/// Document-relative top edge of one `section[id]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// The last section, in document order, whose top minus the offset has been
/// scrolled past.
pub fn active_section(offsets: &[SectionOffset], scroll_y: f64) -> Option<&str> {
    offsets
        .iter()
        .filter(|s| scroll_y >= s.top - SPY_OFFSET)
        .last()
        .map(|s| s.id.as_str())
}

#[derive(Debug, Default)]
pub struct ScrollSpy {
    current: Option<String>,
}

impl ScrollSpy {
    /// Starts with no active link.
    pub fn attach() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Recomputes the active section and moves the `active` class so that at
    /// most one `.nav-link` carries it.
    pub fn apply(&mut self, doc: &mut Document, offsets: &[SectionOffset], scroll_y: f64) -> Option<&str> {
        let active = active_section(offsets, scroll_y).map(str::to_string);
        doc.update_all(".nav-link[data-section]", |link| {
            if active.as_deref().is_some_and(|id| link.get_attr("data-section") == Some(id)) {
                link.add_class("active");
            } else {
                link.remove_class("active");
            }
        });
        if active != self.current {
            tracing::debug!(section = ?active, "scroll-spy moved");
        }
        self.current = active;
        self.current.as_deref()
    }
}
