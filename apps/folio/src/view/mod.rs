pub mod collections;
pub mod document;
pub mod format;
pub mod node;
pub mod optional;
pub mod profile;
pub mod shell;

use crate::models::portfolio::PortfolioSnapshot;
use document::Document;

/// Renders every section of the page from one snapshot, in a fixed order.
///
/// Safe to call repeatedly on the same document: every list container is
/// cleared before it is rebuilt.
pub fn render_all(doc: &mut Document, snapshot: &PortfolioSnapshot) {
    profile::render_hero(doc, snapshot);
    profile::render_about(doc, snapshot);
    collections::render_skills(doc, snapshot);
    collections::render_projects(doc, snapshot);
    collections::render_education(doc, snapshot);
    optional::render_experiences(doc, snapshot);
    optional::render_certifications(doc, snapshot);
    optional::render_languages(doc, snapshot);
    optional::render_interests(doc, snapshot);
    optional::render_custom_sections(doc, snapshot);
    profile::render_footer(doc, snapshot);
}
