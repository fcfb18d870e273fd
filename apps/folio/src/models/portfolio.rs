//! Portfolio data contract: the JSON shape consumed from the backend and
//! served back by `/api/portfolio`.
//!
//! Every optional text field is an `Option<String>`. Blank strings coming from
//! the backend are folded into `None` at deserialization time so that renderers
//! branch on presence only.

use serde::{Deserialize, Deserializer, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Snapshot
// ────────────────────────────────────────────────────────────────────────────

/// The complete in-memory portfolio value used for one page render.
///
/// `experiences`, `certifications`, `languages`, `interests` and
/// `custom_sections` back optional page sections: `None` and `Some(vec![])`
/// both leave the section hidden, but they are distinct values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experiences: Option<Vec<Experience>>,
    #[serde(default)]
    pub certifications: Option<Vec<Certification>>,
    #[serde(default)]
    pub languages: Option<Vec<Language>>,
    #[serde(default)]
    pub interests: Option<Vec<Interest>>,
    #[serde(default)]
    pub custom_sections: Option<Vec<CustomSection>>,
}

impl PortfolioSnapshot {
    /// Number of projects that would render (published only).
    pub fn published_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.is_published)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
}

impl SocialLink {
    /// Icon class to display: explicit class, then the icon name, then a
    /// brand class derived from the platform name.
    pub fn resolved_icon_class(&self) -> String {
        self.icon_class
            .clone()
            .or_else(|| self.icon.clone())
            .unwrap_or_else(|| format!("fab fa-{}", self.platform.to_lowercase()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub short_bio: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub resume: Option<String>,
    #[serde(default)]
    pub is_available_for_hire: bool,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

// ────────────────────────────────────────────────────────────────────────────
// Skills & projects
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Percentage; clamped to 0–100 when rendered.
    #[serde(default)]
    pub proficiency: i32,
    #[serde(default)]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub items: Vec<SkillItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub live_url: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub github_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_published: bool,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub bullets: Vec<Bullet>,
}

// ────────────────────────────────────────────────────────────────────────────
// Timeline records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub field_of_study: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub gpa: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub institution_logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub company_url: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub bullets: Vec<Bullet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuing_organization: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub issue_date: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub expiry_date: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub credential_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub credential_url: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Small lists
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub proficiency: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomSectionItem {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomSection {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub show_in_nav: bool,
    #[serde(default)]
    pub items: Vec<CustomSectionItem>,
}

// ────────────────────────────────────────────────────────────────────────────
// Ordering
// ────────────────────────────────────────────────────────────────────────────

/// Records carrying an optional explicit `order` field.
pub trait Ordered {
    fn order(&self) -> Option<i32>;
}

macro_rules! impl_ordered {
    ($($ty:ty),* $(,)?) => {
        $(impl Ordered for $ty {
            fn order(&self) -> Option<i32> {
                self.order
            }
        })*
    };
}

impl_ordered!(
    SocialLink,
    SkillItem,
    SkillGroup,
    Bullet,
    Project,
    Language,
    Interest,
    CustomSectionItem,
    CustomSection,
);

/// Stable sort by the explicit `order` field. Items without an order go after
/// ordered ones; ties keep source order. Renderers never call this themselves.
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(|item| match item.order() {
        Some(order) => (0, order),
        None => (1, 0),
    });
}

impl PortfolioSnapshot {
    /// Returns a copy with every ordered list (and nested list) pre-sorted.
    pub fn sorted(&self) -> PortfolioSnapshot {
        let mut out = self.clone();
        if let Some(profile) = out.profile.as_mut() {
            sort_by_order(&mut profile.social_links);
        }
        sort_by_order(&mut out.skills);
        for group in &mut out.skills {
            sort_by_order(&mut group.items);
        }
        sort_by_order(&mut out.projects);
        for project in &mut out.projects {
            sort_by_order(&mut project.bullets);
        }
        for experience in out.experiences.iter_mut().flatten() {
            sort_by_order(&mut experience.bullets);
        }
        if let Some(languages) = out.languages.as_mut() {
            sort_by_order(languages);
        }
        if let Some(interests) = out.interests.as_mut() {
            sort_by_order(interests);
        }
        if let Some(sections) = out.custom_sections.as_mut() {
            sort_by_order(sections);
            for section in sections.iter_mut() {
                sort_by_order(&mut section.items);
            }
        }
        out
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Serde helpers
// ────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}

/// Deserializes `null`, missing and whitespace-only strings as `None`.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
