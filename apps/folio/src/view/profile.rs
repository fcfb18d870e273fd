//! Profile-derived sections: hero, about and footer.
//!
//! Each renderer is a no-op when the snapshot has no profile, and skips any
//! single field whose anchor is missing from the page.

use crate::models::portfolio::{PortfolioSnapshot, Profile, SocialLink};
use crate::view::document::Document;
use crate::view::format::strip_scheme;
use crate::view::node::{el, Element, Node};

const LOCATION_ICON: &str = r#"<i class="fas fa-location-dot" aria-hidden="true"></i>"#;
const EMAIL_ICON: &str = r#"<i class="fas fa-envelope" aria-hidden="true"></i>"#;

fn icon(class: String) -> Element {
    el("i").class(class).attr("aria-hidden", "true")
}

fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}

// ────────────────────────────────────────────────────────────────────────────
// Hero
// ────────────────────────────────────────────────────────────────────────────

pub fn render_hero(doc: &mut Document, snapshot: &PortfolioSnapshot) {
    let Some(profile) = snapshot.profile.as_ref() else {
        return;
    };

    if let Some(name) = &profile.full_name {
        doc.set_text(".hero-title", name);
    }
    if let Some(subtitle) = &profile.subtitle {
        doc.set_text(".hero-subtitle", subtitle);
    }
    if let Some(title) = &profile.title {
        doc.set_text(".hero-eyebrow", title);
    }
    if let Some(bio) = &profile.bio {
        doc.set_text(".hero-description", bio);
    }

    doc.replace_children(".hero-meta", hero_meta(profile));

    if let Some(email) = &profile.email {
        doc.set_attr(".hero-cta .btn-secondary", "href", &mailto(email));
    }

    render_avatar(doc, profile);
}

/// Location, email and social links, in that order.
pub fn hero_meta(profile: &Profile) -> Vec<Node> {
    let mut items = Vec::new();
    if let Some(location) = &profile.location {
        items.push(
            el("li")
                .trusted(LOCATION_ICON)
                .child(el("span").text(location))
                .into(),
        );
    }
    if let Some(email) = &profile.email {
        items.push(
            el("li")
                .trusted(EMAIL_ICON)
                .child(el("a").attr("href", mailto(email)).text(email))
                .into(),
        );
    }
    for social in &profile.social_links {
        items.push(
            el("li")
                .child(icon(social.resolved_icon_class()))
                .child(
                    el("a")
                        .attr("href", social.url.as_str())
                        .external()
                        .text(strip_scheme(&social.url)),
                )
                .into(),
        );
    }
    items
}

fn render_avatar(doc: &mut Document, profile: &Profile) {
    let has_image = doc.exists(".hero-image-container");
    match (&profile.avatar, has_image) {
        (Some(avatar), false) => {
            let alt = profile.full_name.clone().unwrap_or_default();
            let container = el("div")
                .class("hero-image-container animate-fade-in")
                .child(el("img").class("hero-avatar").attr("src", avatar.as_str()).attr("alt", alt));
            if doc.append_child(".hero-container", container) {
                doc.add_class(".hero-container", "has-image");
            }
        }
        (Some(avatar), true) => {
            doc.set_attr(".hero-image-container img", "src", avatar);
        }
        (None, true) => {
            doc.remove(".hero-image-container");
            doc.remove_class(".hero-container", "has-image");
        }
        (None, false) => {}
    }
}

// ────────────────────────────────────────────────────────────────────────────
// About
// ────────────────────────────────────────────────────────────────────────────

pub fn render_about(doc: &mut Document, snapshot: &PortfolioSnapshot) {
    let Some(profile) = snapshot.profile.as_ref() else {
        return;
    };
    if let Some(bio) = &profile.bio {
        doc.set_text(".about-content .lead", bio);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Footer
// ────────────────────────────────────────────────────────────────────────────

pub fn render_footer(doc: &mut Document, snapshot: &PortfolioSnapshot) {
    let Some(profile) = snapshot.profile.as_ref() else {
        return;
    };
    if let Some(name) = &profile.full_name {
        doc.set_text(".footer-name", name);
    }
    if let Some(title) = &profile.title {
        doc.set_text(".footer-title", title);
    }
    doc.replace_children(".footer-right", footer_links(profile));
}

pub fn footer_links(profile: &Profile) -> Vec<Node> {
    let mut links = Vec::new();
    if let Some(email) = &profile.email {
        links.push(
            el("a")
                .class("footer-link")
                .attr("href", mailto(email))
                .trusted(EMAIL_ICON)
                .child(el("span").text("Email"))
                .into(),
        );
    }
    links.extend(profile.social_links.iter().map(|s| footer_social(s).into()));
    links
}

fn footer_social(social: &SocialLink) -> Element {
    el("a")
        .class("footer-link")
        .attr("href", social.url.as_str())
        .external()
        .child(icon(social.resolved_icon_class()))
        .child(el("span").text(social.platform.as_str()))
}
