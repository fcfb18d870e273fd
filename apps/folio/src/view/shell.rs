//! Host page skeleton: the fixed set of anchors the renderers and
//! controllers expect to find.

use crate::view::document::Document;
use crate::view::node::{el, Element};

const STYLESHEET: &str = "/static/styles.css";
const ICONS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Navigation entries: (section id, label).
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("about", "À propos"),
    ("skills", "Compétences"),
    ("projects", "Projets"),
    ("education", "Formation"),
    ("contact", "Contact"),
];

/// Builds a fresh host page with every section empty.
pub fn host_page() -> Document {
    Document::new(
        el("html")
            .attr("lang", "fr")
            .attr("data-theme", "light")
            .child(head())
            .child(
                el("body")
                    .child(navbar())
                    .child(el("main").children([
                        hero(),
                        about(),
                        list_section("skills", "Compétences", "Ce que je maîtrise", "skills-grid", "skills-grid"),
                        list_section("projects", "Projets", "Réalisations", "projects-list", "projects-list"),
                        list_section("education", "Formation", "Parcours académique", "education-timeline", "timeline"),
                        hidden_section("experiences", "Expérience", "Parcours professionnel"),
                        hidden_section("certifications", "Certifications", "Certifications"),
                        hidden_section("languages", "Langues", "Langues parlées"),
                        hidden_section("interests", "Centres d'intérêt", "En dehors du travail"),
                        el("div").id("custom-sections-container"),
                        contact(),
                    ]))
                    .child(footer()),
            ),
    )
}

fn head() -> Element {
    el("head")
        .child(el("meta").attr("charset", "utf-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(el("title").text("Portfolio"))
        .child(el("link").attr("rel", "stylesheet").attr("href", ICONS))
        .child(el("link").attr("rel", "stylesheet").attr("href", STYLESHEET))
}

fn navbar() -> Element {
    let links = NAV_SECTIONS.iter().map(|(id, label)| {
        el("li").child(
            el("a")
                .class("nav-link")
                .attr("href", format!("#{id}"))
                .attr("data-section", *id)
                .text(*label),
        )
    });
    let theme_toggle = el("li").child(
        el("button")
            .id("theme-toggle")
            .class("theme-toggle")
            .attr("type", "button")
            .attr("aria-label", "Changer de thème")
            .child(el("i").class("fas fa-moon")),
    );

    el("nav").class("navbar").child(
        el("div")
            .class("nav-container")
            .child(el("a").class("nav-logo").attr("href", "#hero").text("Portfolio"))
            .child(
                el("button")
                    .id("hamburger")
                    .class("hamburger")
                    .attr("type", "button")
                    .attr("aria-label", "Menu")
                    .children([el("span"), el("span"), el("span")]),
            )
            .child(
                el("ul")
                    .id("nav-menu")
                    .class("nav-menu")
                    .children(links)
                    .child(theme_toggle),
            ),
    )
}

fn section_header(label: &str, title: &str) -> Element {
    el("div")
        .class("section-header animate-on-scroll")
        .child(el("span").class("section-label").text(label))
        .child(el("h2").class("section-title").text(title))
        .child(el("div").class("section-divider"))
}

fn hero() -> Element {
    el("section").id("hero").class("hero").child(
        el("div").class("hero-container").child(
            el("div")
                .class("hero-content animate-fade-in")
                .child(el("p").class("hero-eyebrow"))
                .child(el("h1").class("hero-title"))
                .child(el("p").class("hero-subtitle"))
                .child(el("p").class("hero-description"))
                .child(el("ul").class("hero-meta"))
                .child(
                    el("div")
                        .class("hero-cta")
                        .child(
                            el("a")
                                .class("btn btn-primary")
                                .attr("href", "#projects")
                                .text("Voir mes projets"),
                        )
                        .child(
                            el("a")
                                .class("btn btn-secondary")
                                .attr("href", "#contact")
                                .text("Me contacter"),
                        ),
                ),
        ),
    )
}

fn about() -> Element {
    el("section").id("about").class("about").child(
        el("div")
            .class("container")
            .child(section_header("À propos", "Profil"))
            .child(
                el("div")
                    .class("about-content animate-on-scroll")
                    .child(el("p").class("lead")),
            ),
    )
}

fn list_section(id: &'static str, label: &str, title: &str, container_id: &str, container_class: &str) -> Element {
    el("section").id(id).child(
        el("div")
            .class("container")
            .child(section_header(label, title))
            .child(el("div").id(container_id).class(container_class)),
    )
}

/// Optional sections start hidden; their renderer reveals them only when the
/// backing list has items.
fn hidden_section(id: &str, label: &str, title: &str) -> Element {
    el("section")
        .id(id)
        .attr("style", "display:none")
        .child(
            el("div")
                .class("container")
                .child(section_header(label, title))
                .child(el("div").id(format!("{id}-container")).class(format!("{id}-container"))),
        )
}

fn form_field(name: &'static str, label: &str, kind: &'static str) -> Element {
    let input = if kind == "textarea" {
        el("textarea").attr("rows", "6")
    } else {
        el("input").attr("type", kind)
    };
    el("div")
        .class("form-group")
        .child(el("label").attr("for", name).text(label))
        .child(input.id(name).attr("name", name))
        .child(
            el("span")
                .id(format!("{name}-error"))
                .class("field-error")
                .attr("aria-live", "polite"),
        )
}

fn contact() -> Element {
    el("section").id("contact").class("contact").child(
        el("div")
            .class("container")
            .child(section_header("Contact", "Me contacter"))
            .child(
                el("form")
                    .id("contact-form")
                    .class("contact-form animate-on-scroll")
                    .attr("action", "/contact")
                    .attr("method", "post")
                    .attr("novalidate", "novalidate")
                    .child(form_field("name", "Nom", "text"))
                    .child(form_field("email", "Email", "email"))
                    .child(form_field("phone", "Téléphone", "tel"))
                    .child(form_field("subject", "Sujet", "text"))
                    .child(form_field("message", "Message", "textarea"))
                    .child(
                        el("button")
                            .class("btn btn-primary")
                            .attr("type", "submit")
                            .text("Envoyer"),
                    )
                    .child(el("p").id("form-status").class("form-status").attr("aria-live", "polite")),
            ),
    )
}

fn footer() -> Element {
    el("footer").class("footer").child(
        el("div")
            .class("footer-container")
            .child(
                el("div")
                    .class("footer-left")
                    .child(el("p").class("footer-name"))
                    .child(el("p").class("footer-title")),
            )
            .child(el("div").class("footer-right")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_exposes_every_anchor() {
        let doc = host_page();
        for selector in [
            "#nav-menu",
            "#hamburger",
            "#theme-toggle i",
            ".hero-title",
            ".hero-meta",
            ".hero-cta .btn-secondary",
            ".about-content .lead",
            "#skills-grid",
            "#projects-list",
            "#education-timeline",
            "#experiences-container",
            "#certifications-container",
            "#languages-container",
            "#interests-container",
            "#custom-sections-container",
            "#contact-form",
            "#message-error",
            "#phone-error",
            "#form-status",
            ".footer-name",
            ".footer-right",
        ] {
            assert!(doc.exists(selector), "missing anchor {selector}");
        }
    }

    #[test]
    fn test_optional_sections_start_hidden() {
        let doc = host_page();
        for id in ["#experiences", "#certifications", "#languages", "#interests"] {
            assert_eq!(doc.query(id).and_then(|e| e.style("display")), Some("none"));
        }
        assert_eq!(doc.query("#skills").and_then(|e| e.style("display")), None);
    }

    #[test]
    fn test_every_contact_field_has_an_error_slot() {
        let doc = host_page();
        for field in crate::contact::FIELDS {
            assert!(doc.exists(&format!("#contact-form #{field}")), "missing input {field}");
            assert!(doc.exists(&format!("#{field}-error")), "missing slot {field}");
        }
        assert_eq!(
            doc.query("#contact-form").and_then(|f| f.get_attr("action")),
            Some("/contact")
        );
    }

    #[test]
    fn test_theme_toggle_is_last_nav_item() {
        let doc = host_page();
        assert!(doc.exists("#nav-menu li:last-child #theme-toggle"));
        assert_eq!(doc.count(".nav-link[data-section]"), NAV_SECTIONS.len());
    }
}
