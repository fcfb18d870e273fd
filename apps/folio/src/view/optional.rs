//! Optional sections: experiences, certifications, languages, interests and
//! custom sections.
//!
//! An absent or empty list leaves the section hidden with no children. A
//! section still in its shell state is not touched at all. Otherwise the
//! section is revealed and its container rebuilt.

use crate::models::portfolio::{
    Certification, CustomSection, CustomSectionItem, Experience, Interest, Language,
    PortfolioSnapshot,
};
use crate::view::document::Document;
use crate::view::format::{format_date_range, format_month_year};
use crate::view::node::{el, text, Element, Node};

const CALENDAR_ICON: &str = r#"<i class="fas fa-calendar" aria-hidden="true"></i>"#;
const PIN_ICON: &str = r#"<i class="fas fa-location-dot" aria-hidden="true"></i>"#;
const CERTIFICATE_LINK: &str = r#"<i class="fas fa-external-link-alt" aria-hidden="true"></i><span>Voir le certificat</span>"#;

/// Marks nav entries added for custom sections so a re-render can drop them.
const CUSTOM_NAV_CLASS: &str = "nav-custom";

fn render_optional<T>(
    doc: &mut Document,
    section: &str,
    container: &str,
    items: Option<&Vec<T>>,
    build: impl Fn(&T) -> Element,
) {
    let Some(items) = items.filter(|items| !items.is_empty()) else {
        let shown = doc
            .query(section)
            .is_some_and(|s| s.style("display") != Some("none"));
        let filled = doc
            .query(container)
            .is_some_and(|c| !c.children.is_empty());
        if shown || filled {
            doc.replace_children(container, Vec::new());
            doc.hide(section);
        }
        return;
    };
    if !doc.exists(container) {
        return;
    }
    doc.show(section);
    doc.replace_children(container, items.iter().map(|i| build(i).into()).collect());
}

// ────────────────────────────────────────────────────────────────────────────
// Experiences
// ────────────────────────────────────────────────────────────────────────────

pub fn render_experiences(doc: &mut Document, snapshot: &PortfolioSnapshot) {
    render_optional(
        doc,
        "#experiences",
        "#experiences-container",
        snapshot.experiences.as_ref(),
        experience_card,
    );
}

pub fn experience_card(exp: &Experience) -> Element {
    let mut header = el("div").class("experience-header");
    if let Some(logo) = &exp.company_logo {
        header = header.child(
            el("img")
                .class("company-logo")
                .attr("src", logo.as_str())
                .attr("alt", exp.company.as_str()),
        );
    }

    let company = match &exp.company_url {
        Some(url) => el("div").class("experience-company").child(
            el("a")
                .attr("href", url.as_str())
                .external()
                .text(exp.company.as_str()),
        ),
        None => el("div").class("experience-company").text(exp.company.as_str()),
    };

    let mut meta = el("div").class("experience-meta");
    if let Some(range) = format_date_range(
        exp.start_date.as_deref(),
        exp.end_date.as_deref(),
        exp.is_current,
    ) {
        meta = meta.child(el("span").trusted(CALENDAR_ICON).text(range));
    }
    if let Some(location) = &exp.location {
        meta = meta.child(el("span").trusted(PIN_ICON).text(location.as_str()));
    }

    header = header.child(
        el("div")
            .class("experience-header-content")
            .child(el("h3").class("experience-position").text(exp.position.as_str()))
            .child(company)
            .child(meta),
    );

    let mut card = el("article")
        .class("experience-card animate-on-scroll")
        .child(header);
    if let Some(description) = &exp.description {
        card = card.child(el("p").class("experience-description").text(description.as_str()));
    }
    if !exp.bullets.is_empty() {
        card = card.child(
            el("ul")
                .class("experience-bullets")
                .children(exp.bullets.iter().map(|b| el("li").text(b.text.as_str()))),
        );
    }
    card
}

// ────────────────────────────────────────────────────────────────────────────
// Certifications
// ────────────────────────────────────────────────────────────────────────────

pub fn render_certifications(doc: &mut Document, snapshot: &PortfolioSnapshot) {
    render_optional(
        doc,
        "#certifications",
        "#certifications-container",
        snapshot.certifications.as_ref(),
        certification_card,
    );
}

/// `Délivré: <mois> <année>`, with ` • Expire: ...` when an expiry exists.
pub fn certification_dates(cert: &Certification) -> Option<String> {
    let issued = format_month_year(cert.issue_date.as_deref()?)?;
    let mut line = format!("Délivré: {issued}");
    if let Some(expires) = cert.expiry_date.as_deref().and_then(format_month_year) {
        line.push_str(&format!(" • Expire: {expires}"));
    }
    Some(line)
}

pub fn certification_card(cert: &Certification) -> Element {
    let mut card = el("article")
        .class("certification-card animate-on-scroll")
        .child(el("h3").class("certification-title").text(cert.name.as_str()))
        .child(
            el("div")
                .class("certification-org")
                .text(cert.issuing_organization.as_str()),
        );
    if let Some(dates) = certification_dates(cert) {
        card = card.child(el("div").class("certification-date").text(dates));
    }
    if let Some(url) = &cert.credential_url {
        card = card.child(
            el("a")
                .class("btn btn-outline btn-sm")
                .attr("href", url.as_str())
                .external()
                .trusted(CERTIFICATE_LINK),
        );
    }
    card
}

// ────────────────────────────────────────────────────────────────────────────
// Languages & interests
// ────────────────────────────────────────────────────────────────────────────

pub fn render_languages(doc: &mut Document, snapshot: &PortfolioSnapshot) {
    render_optional(
        doc,
        "#languages",
        "#languages-container",
        snapshot.languages.as_ref(),
        language_item,
    );
}

fn language_item(lang: &Language) -> Element {
    let mut item = el("div")
        .class("language-item")
        .child(el("span").class("language-name").text(lang.name.as_str()));
    if let Some(level) = &lang.proficiency {
        item = item.child(el("span").class("language-proficiency").text(level.as_str()));
    }
    item
}

pub fn render_interests(doc: &mut Document, snapshot: &PortfolioSnapshot) {
    render_optional(
        doc,
        "#interests",
        "#interests-container",
        snapshot.interests.as_ref(),
        interest_item,
    );
}

fn interest_item(interest: &Interest) -> Element {
    let mut item = el("div").class("interest-item");
    if let Some(icon) = &interest.icon {
        item = item.child(el("i").class(icon.as_str()));
    }
    item.child(el("span").class("interest-name").text(interest.name.as_str()))
}

// ────────────────────────────────────────────────────────────────────────────
// Custom sections
// ────────────────────────────────────────────────────────────────────────────

pub fn render_custom_sections(doc: &mut Document, snapshot: &PortfolioSnapshot) {
    if !doc.exists("#custom-sections-container") {
        return;
    }

    let sections: Vec<&CustomSection> = snapshot
        .custom_sections
        .iter()
        .flatten()
        .filter(|s| !s.items.is_empty())
        .collect();

    // Nav entries from a previous render would otherwise be duplicated.
    while doc.remove(&format!("#nav-menu li.{CUSTOM_NAV_CLASS}")) {}

    doc.replace_children(
        "#custom-sections-container",
        sections.iter().map(|s| custom_section(s).into()).collect(),
    );

    for section in sections.iter().filter(|s| s.show_in_nav) {
        doc.insert_before_last("#nav-menu", custom_nav_entry(section));
    }
}

pub fn custom_section(section: &CustomSection) -> Element {
    let mut title = el("h2").class("section-title");
    if let Some(icon) = &section.icon {
        title = title.child(el("i").class(icon.as_str())).child(text(" "));
    }
    title = title.text(section.title.as_str());

    let header = el("div")
        .class("section-header animate-on-scroll")
        .child(el("span").class("section-label").text(section.title.as_str()))
        .child(title)
        .child(el("div").class("section-divider"));

    let items = el("div")
        .class("custom-section-items animate-on-scroll")
        .children(section.items.iter().map(custom_item));

    let mut element = el("section").class("custom-section");
    if !section.slug.is_empty() {
        element = element.id(section.slug.as_str());
    }
    element.child(el("div").class("container").child(header).child(items))
}

fn custom_item(item: &CustomSectionItem) -> Element {
    let mut card = el("article").class("custom-section-item");
    if let Some(icon) = &item.icon {
        card = card.child(el("i").class(format!("custom-item-icon {icon}")));
    }

    let title = match &item.url {
        Some(url) => el("h3").class("custom-item-title").child(
            el("a")
                .attr("href", url.as_str())
                .external()
                .text(item.title.as_str()),
        ),
        None => el("h3").class("custom-item-title").text(item.title.as_str()),
    };

    let mut content: Vec<Node> = vec![title.into()];
    if let Some(subtitle) = &item.subtitle {
        content.push(el("div").class("custom-item-subtitle").text(subtitle.as_str()).into());
    }
    if let Some(date) = &item.date {
        content.push(el("div").class("custom-item-date").text(date.as_str()).into());
    }
    if let Some(description) = &item.description {
        content.push(el("p").class("custom-item-description").text(description.as_str()).into());
    }

    card.child(el("div").class("custom-item-content").children(content))
}

fn custom_nav_entry(section: &CustomSection) -> Element {
    el("li").class(CUSTOM_NAV_CLASS).child(
        el("a")
            .class("nav-link")
            .attr("href", format!("#{}", section.slug))
            .attr("data-section", section.slug.as_str())
            .text(section.title.as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::fallback_snapshot;
    use crate::models::portfolio::Bullet;
    use crate::view::shell::host_page;

    fn render_all_optional(doc: &mut Document, snapshot: &PortfolioSnapshot) {
        render_experiences(doc, snapshot);
        render_certifications(doc, snapshot);
        render_languages(doc, snapshot);
        render_interests(doc, snapshot);
    }

    #[test]
    fn test_empty_optional_lists_leave_sections_hidden() {
        let mut doc = host_page();
        let before = doc.clone();
        render_all_optional(&mut doc, fallback_snapshot());
        assert_eq!(doc, before);
        for (section, container) in [
            ("#experiences", "#experiences-container"),
            ("#certifications", "#certifications-container"),
            ("#languages", "#languages-container"),
            ("#interests", "#interests-container"),
        ] {
            assert_eq!(doc.query(section).and_then(|e| e.style("display")), Some("none"));
            assert!(doc.query(container).unwrap().children.is_empty());
        }
    }

    #[test]
    fn test_absent_optional_lists_leave_sections_hidden() {
        let mut doc = host_page();
        let before = doc.clone();
        render_all_optional(&mut doc, &PortfolioSnapshot::default());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_emptied_list_hides_previously_rendered_section() {
        let full = PortfolioSnapshot {
            experiences: Some(vec![Experience {
                company: "Acme".into(),
                position: "Analyste".into(),
                ..Default::default()
            }]),
            languages: Some(vec![Language { name: "Français".into(), ..Default::default() }]),
            ..Default::default()
        };
        let emptied = PortfolioSnapshot {
            experiences: Some(vec![]),
            languages: None,
            ..Default::default()
        };

        let mut doc = host_page();
        render_all_optional(&mut doc, &full);
        assert_eq!(doc.count(".experience-card"), 1);

        render_all_optional(&mut doc, &emptied);
        assert_eq!(doc.query("#experiences").and_then(|e| e.style("display")), Some("none"));
        assert_eq!(doc.query("#languages").and_then(|e| e.style("display")), Some("none"));
        assert_eq!(doc.count(".experience-card"), 0);
        assert_eq!(doc.count(".language-item"), 0);

        // Already hidden and empty: nothing left to do.
        let settled = doc.mutation_count();
        render_all_optional(&mut doc, &emptied);
        assert_eq!(doc.mutation_count(), settled);
    }

    #[test]
    fn test_non_empty_lists_reveal_sections() {
        let snapshot = PortfolioSnapshot {
            experiences: Some(vec![Experience {
                company: "Acme".into(),
                position: "Analyste".into(),
                company_url: Some("https://acme.example".into()),
                start_date: Some("2023-02-01".into()),
                is_current: true,
                location: Some("Bruxelles".into()),
                bullets: vec![Bullet { text: "Tarification".into(), ..Default::default() }],
                ..Default::default()
            }]),
            languages: Some(vec![
                Language { name: "Français".into(), proficiency: Some("Natif".into()), ..Default::default() },
                Language { name: "Anglais".into(), ..Default::default() },
            ]),
            interests: Some(vec![Interest { name: "Échecs".into(), icon: Some("fas fa-chess".into()), ..Default::default() }]),
            ..Default::default()
        };
        let mut doc = host_page();
        render_all_optional(&mut doc, &snapshot);

        assert_eq!(doc.query("#experiences").and_then(|e| e.style("display")), Some("block"));
        assert_eq!(doc.count(".experience-card"), 1);
        let meta = doc.query(".experience-meta").unwrap().text_content();
        assert!(meta.contains("Depuis 2023"));
        assert!(meta.contains("Bruxelles"));
        let company = doc.query(".experience-company a").unwrap();
        assert_eq!(company.get_attr("rel"), Some("noopener noreferrer"));

        assert_eq!(doc.count(".language-item"), 2);
        assert_eq!(doc.count(".language-proficiency"), 1);
        assert_eq!(doc.count(".interest-item"), 1);
        // Certifications were absent.
        assert_eq!(doc.query("#certifications").and_then(|e| e.style("display")), Some("none"));
    }

    #[test]
    fn test_certification_dates_and_link() {
        let cert = Certification {
            name: "SOA Exam P".into(),
            issuing_organization: "Society of Actuaries".into(),
            issue_date: Some("2024-03-10".into()),
            expiry_date: Some("2027-03-10".into()),
            credential_url: Some("https://soa.org/c/1".into()),
            ..Default::default()
        };
        assert_eq!(
            certification_dates(&cert).as_deref(),
            Some("Délivré: mars 2024 • Expire: mars 2027")
        );
        let html = certification_card(&cert).to_html();
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("Voir le certificat"));

        let undated = Certification { name: "X".into(), ..Default::default() };
        assert!(!certification_card(&undated).to_html().contains("certification-date"));
    }

    fn custom(slug: &str, show_in_nav: bool, items: usize) -> CustomSection {
        CustomSection {
            title: slug.to_uppercase(),
            slug: slug.into(),
            show_in_nav,
            items: (0..items)
                .map(|i| CustomSectionItem { title: format!("item {i}"), ..Default::default() })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_custom_sections_skip_empty_and_extend_nav() {
        let snapshot = PortfolioSnapshot {
            custom_sections: Some(vec![
                custom("publications", true, 2),
                custom("empty", true, 0),
                custom("talks", false, 1),
            ]),
            ..Default::default()
        };
        let mut doc = host_page();
        render_custom_sections(&mut doc, &snapshot);
        assert_eq!(doc.count(".custom-section"), 2);
        assert!(doc.exists("section#publications"));
        assert!(!doc.exists("section#empty"));
        assert_eq!(doc.count(".custom-section-item"), 3);

        assert!(doc.exists(".nav-link[data-section=publications]"));
        assert!(!doc.exists(".nav-link[data-section=talks]"));
        // Theme toggle stays last.
        assert!(doc.exists("#nav-menu li:last-child #theme-toggle"));

        // Re-render does not duplicate nav entries.
        render_custom_sections(&mut doc, &snapshot);
        assert_eq!(doc.count(".nav-link[data-section=publications]"), 1);
        assert_eq!(doc.count(".custom-section"), 2);
    }

    #[test]
    fn test_custom_item_link_is_external() {
        let item = CustomSectionItem {
            title: "Talk".into(),
            url: Some("https://talks.example/1".into()),
            date: Some("2024".into()),
            ..Default::default()
        };
        let html = custom_item(&item).to_html();
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("<div class=\"custom-item-date\">2024</div>"));
        assert!(!html.contains("custom-item-subtitle"));
    }
}
