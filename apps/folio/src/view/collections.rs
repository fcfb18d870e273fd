//! Always-rendered list sections: skills, projects, education.
//!
//! These sections render even when their list is empty, leaving an empty
//! container behind.

use crate::models::portfolio::{Education, PortfolioSnapshot, Project, SkillGroup, SkillItem};
use crate::view::document::Document;
use crate::view::format::format_date_range;
use crate::view::node::{el, Element, Node};

const CODE_LINK: &str =
    r#"<i class="fas fa-code" aria-hidden="true"></i><span>Code</span>"#;
const DEMO_LINK: &str =
    r#"<i class="fas fa-external-link-alt" aria-hidden="true"></i><span>Demo</span>"#;

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

pub fn render_skills(doc: &mut Document, snapshot: &PortfolioSnapshot) {
    let cards = snapshot.skills.iter().map(|g| skill_card(g).into()).collect();
    doc.replace_children("#skills-grid", cards);
}

pub fn skill_card(group: &SkillGroup) -> Element {
    let mut title = el("div").class("skill-title-container");
    if let Some(icon) = &group.icon {
        title = title.child(el("i").class(icon.as_str()));
    }
    title = title.child(el("h3").text(group.name.as_str()));

    el("article")
        .class("skill-card animate-on-scroll")
        .child(title)
        .child(
            el("ul")
                .class("skill-items")
                .children(group.items.iter().map(skill_item)),
        )
}

fn skill_item(item: &SkillItem) -> Element {
    let li = el("li").text(item.name.as_str());
    let proficiency = item.proficiency.clamp(0, 100);
    if proficiency == 0 {
        return li;
    }
    li.child(
        el("div").class("proficiency-bar").child(
            el("div")
                .class("proficiency-fill")
                .attr("style", format!("width:{proficiency}%")),
        ),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

pub fn render_projects(doc: &mut Document, snapshot: &PortfolioSnapshot) {
    let cards = snapshot
        .published_projects()
        .map(|p| project_card(p).into())
        .collect();
    doc.replace_children("#projects-list", cards);
}

pub fn project_card(project: &Project) -> Element {
    let mut card = el("article").class("project-card animate-on-scroll");

    if let Some(image) = &project.featured_image {
        card = card.child(
            el("div").class("project-image").child(
                el("img")
                    .attr("src", image.as_str())
                    .attr("alt", project.title.as_str())
                    .attr("loading", "lazy"),
            ),
        );
    }

    card = card.child(
        el("div")
            .class("project-header")
            .child(el("h3").class("project-title").text(project.title.as_str()))
            .child(
                el("div").class("project-meta").children(
                    project
                        .technologies
                        .iter()
                        .map(|t| el("span").class("chip").text(t.as_str())),
                ),
            ),
    );

    if !project.bullets.is_empty() {
        card = card.child(
            el("ul")
                .class("project-bullets")
                .children(project.bullets.iter().map(|b| el("li").text(b.text.as_str()))),
        );
    } else if let Some(description) = project
        .short_description
        .as_ref()
        .or(project.description.as_ref())
    {
        card = card.child(el("p").class("project-description").text(description.as_str()));
    }

    let mut actions: Vec<Node> = Vec::new();
    if let Some(url) = &project.github_url {
        actions.push(
            el("a")
                .class("btn btn-outline")
                .attr("href", url.as_str())
                .external()
                .trusted(CODE_LINK)
                .into(),
        );
    }
    if let Some(url) = &project.live_url {
        actions.push(
            el("a")
                .class("btn btn-primary")
                .attr("href", url.as_str())
                .external()
                .trusted(DEMO_LINK)
                .into(),
        );
    }
    if !actions.is_empty() {
        card = card.child(el("div").class("project-actions").children(actions));
    }

    card
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

pub fn render_education(doc: &mut Document, snapshot: &PortfolioSnapshot) {
    let rows = snapshot
        .education
        .iter()
        .map(|e| education_row(e).into())
        .collect();
    doc.replace_children("#education-timeline", rows);
}

pub fn education_row(item: &Education) -> Element {
    let mut row = el("div").class("timeline-item");
    if let Some(range) = format_date_range(
        item.start_date.as_deref(),
        item.end_date.as_deref(),
        item.is_current,
    ) {
        row = row.child(el("div").class("timeline-date").text(range));
    }

    let mut content = el("div")
        .class("timeline-content")
        .child(el("div").class("timeline-title").text(item.degree.as_str()))
        .child(el("p").class("timeline-subtitle").text(item.institution.as_str()));

    if let Some(field) = item.field_of_study.as_ref().filter(|f| **f != item.degree) {
        content = content.child(el("p").class("timeline-field").text(field.as_str()));
    }
    if let Some(description) = &item.description {
        content = content.child(el("p").class("timeline-description").text(description.as_str()));
    }

    row.child(content)
}
