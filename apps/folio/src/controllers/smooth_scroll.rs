use crate::view::document::{Document, NodePath};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: NodePath,
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intercept {
    /// Let the browser follow the link.
    PassThrough,
    /// Default prevented, but the fragment names nothing on the page.
    Prevented,
    /// Default prevented and the target scrolled into view.
    Scroll(ScrollRequest),
}

impl Intercept {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Intercept::PassThrough)
    }
}

/// Click on an in-page anchor. Only `#id` fragments are handled; a bare `#`
/// and every other href pass through.
pub fn intercept(href: &str, doc: &Document) -> Intercept {
    let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
        return Intercept::PassThrough;
    };
    match doc.find_path(&format!("#{id}")) {
        Some(target) => Intercept::Scroll(ScrollRequest {
            target,
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Start,
        }),
        None => Intercept::Prevented,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::shell::host_page;

    #[test]
    fn test_fragment_scrolls_to_target() {
        let doc = host_page();
        let Intercept::Scroll(request) = intercept("#projects", &doc) else {
            panic!("expected a scroll");
        };
        assert_eq!(Some(request.target), doc.find_path("section#projects"));
        assert_eq!(request.behavior, ScrollBehavior::Smooth);
        assert_eq!(request.block, ScrollBlock::Start);
    }

    #[test]
    fn test_bare_hash_and_external_links_pass_through() {
        let doc = host_page();
        assert_eq!(intercept("#", &doc), Intercept::PassThrough);
        assert_eq!(intercept("https://github.com", &doc), Intercept::PassThrough);
        assert!(!intercept("/cv.pdf", &doc).prevents_default());
    }

    #[test]
    fn test_missing_target_still_prevents_default() {
        let doc = host_page();
        let outcome = intercept("#nowhere", &doc);
        assert_eq!(outcome, Intercept::Prevented);
        assert!(outcome.prevents_default());
    }
}
