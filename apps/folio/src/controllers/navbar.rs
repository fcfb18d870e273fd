use crate::view::document::Document;

/// Scroll distance past which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Toggles `scrolled` on `.navbar`. Returns the new state.
pub fn apply(doc: &mut Document, scroll_y: f64) -> bool {
    let scrolled = scroll_y > SCROLLED_THRESHOLD;
    if scrolled {
        doc.add_class(".navbar", "scrolled");
    } else {
        doc.remove_class(".navbar", "scrolled");
    }
    scrolled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::shell::host_page;

    #[test]
    fn test_threshold_is_exclusive() {
        let mut doc = host_page();
        assert!(!apply(&mut doc, 50.0));
        assert!(!doc.query(".navbar").unwrap().has_class("scrolled"));
        assert!(apply(&mut doc, 51.0));
        assert!(doc.query(".navbar").unwrap().has_class("scrolled"));
        assert!(!apply(&mut doc, 0.0));
        assert!(!doc.query(".navbar").unwrap().has_class("scrolled"));
    }
}
