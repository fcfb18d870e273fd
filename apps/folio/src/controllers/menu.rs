//! Mobile navigation menu.
//!
//! Opening locks body scrolling with `overflow:hidden`; every path that
//! closes the menu releases the lock.

use crate::view::document::Document;

#[derive(Debug, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Starts closed.
    pub fn attach() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger click. No-op when the menu markup is missing.
    pub fn toggle(&mut self, doc: &mut Document) {
        if !doc.exists("#hamburger") || !doc.exists("#nav-menu") {
            return;
        }
        self.set_open(doc, !self.open);
    }

    /// Any `.nav-link` click closes the menu.
    pub fn link_clicked(&mut self, doc: &mut Document) {
        self.set_open(doc, false);
    }

    /// A click anywhere on the page. `target` is the clicked element's path;
    /// clicks inside the hamburger or the menu itself are ignored.
    pub fn outside_click(&mut self, doc: &mut Document, target: &[usize]) {
        let inside = ["#hamburger", "#nav-menu"]
            .iter()
            .filter_map(|selector| doc.find_path(selector))
            .any(|anchor| target.starts_with(&anchor));
        if !inside {
            self.set_open(doc, false);
        }
    }

    fn set_open(&mut self, doc: &mut Document, open: bool) {
        self.open = open;
        for selector in ["#hamburger", "#nav-menu"] {
            if open {
                doc.add_class(selector, "active");
            } else {
                doc.remove_class(selector, "active");
            }
        }
        doc.set_style("body", "overflow", if open { "hidden" } else { "" });
    }
}
