//! Data loader, the single point where portfolio data enters the process.
//!
//! `load` is total: one attempt against the configured source, and on any
//! failure the static fallback is returned unchanged. No retry, no backoff,
//! no timeout.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::fallback::fallback_snapshot;
use crate::models::portfolio::{
    Certification, CustomSection, Education, Experience, Interest, Language, PortfolioSnapshot,
    Profile, Project, SkillGroup,
};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the live portfolio comes from.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    async fn fetch(&self) -> Result<PortfolioSnapshot, LoadError>;
}

/// Loads the snapshot, substituting the fallback on any failure. Never fails.
pub async fn load(source: &dyn PortfolioSource) -> PortfolioSnapshot {
    match source.fetch().await {
        Ok(snapshot) => {
            info!(
                "Portfolio data loaded from API: profile={} skills={} projects={} education={}",
                snapshot.profile.is_some(),
                snapshot.skills.len(),
                snapshot.projects.len(),
                snapshot.education.len()
            );
            snapshot
        }
        Err(e) => {
            warn!("Failed to fetch portfolio data from API, using fallback: {e}");
            fallback_snapshot().clone()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP source
// ────────────────────────────────────────────────────────────────────────────

/// Shape of the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiLayout {
    /// `GET {base}/portfolio/` returns the whole snapshot.
    Aggregate,
    /// One paginated `GET {base}/{entity}/` per collection.
    PerEntity,
}

impl std::str::FromStr for ApiLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aggregate" => Ok(ApiLayout::Aggregate),
            "per_entity" | "per-entity" => Ok(ApiLayout::PerEntity),
            other => Err(format!("unknown API layout '{other}'")),
        }
    }
}

/// Paginated list envelope returned by the per-entity endpoints.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<T>,
}

#[derive(Clone)]
pub struct HttpPortfolioSource {
    client: Client,
    base_url: String,
    layout: ApiLayout,
}

impl HttpPortfolioSource {
    pub fn new(base_url: impl Into<String>, layout: ApiLayout) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            layout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}/", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LoadError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        // Read as text first so that shape errors surface as `Parse`.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches every page of a paginated collection by following `next`.
    async fn get_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, LoadError> {
        let mut url = Some(self.url(path));
        let mut items = Vec::new();
        while let Some(current) = url {
            let page: Page<T> = self.get_json(&current).await?;
            debug!(
                "Fetched {} {} of {:?}",
                page.results.len(),
                path,
                page.count
            );
            items.extend(page.results);
            url = page.next;
        }
        Ok(items)
    }

    async fn fetch_per_entity(&self) -> Result<PortfolioSnapshot, LoadError> {
        let profiles: Vec<Profile> = self.get_all("profile").await?;
        let skills: Vec<SkillGroup> = self.get_all("skills").await?;
        let projects: Vec<Project> = self.get_all("projects").await?;
        let education: Vec<Education> = self.get_all("education").await?;
        let experiences: Vec<Experience> = self.get_all("experiences").await?;
        let certifications: Vec<Certification> = self.get_all("certifications").await?;
        let languages: Vec<Language> = self.get_all("languages").await?;
        let interests: Vec<Interest> = self.get_all("interests").await?;
        let custom_sections: Vec<CustomSection> = self.get_all("custom-sections").await?;

        // Built only once every request has succeeded: never a partial snapshot.
        Ok(PortfolioSnapshot {
            profile: profiles.into_iter().next(),
            skills,
            projects,
            education,
            experiences: Some(experiences),
            certifications: Some(certifications),
            languages: Some(languages),
            interests: Some(interests),
            custom_sections: Some(custom_sections),
        })
    }
}

#[async_trait]
impl PortfolioSource for HttpPortfolioSource {
    async fn fetch(&self) -> Result<PortfolioSnapshot, LoadError> {
        match self.layout {
            ApiLayout::Aggregate => self.get_json(&self.url("portfolio")).await,
            ApiLayout::PerEntity => self.fetch_per_entity().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    struct FailingSource;

    #[async_trait]
    impl PortfolioSource for FailingSource {
        async fn fetch(&self) -> Result<PortfolioSnapshot, LoadError> {
            Err(LoadError::Status {
                status: 503,
                url: "http://test/portfolio/".to_string(),
            })
        }
    }

    struct FixedSource(PortfolioSnapshot);

    #[async_trait]
    impl PortfolioSource for FixedSource {
        async fn fetch(&self) -> Result<PortfolioSnapshot, LoadError> {
            Ok(self.0.clone())
        }
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api")
    }

    #[tokio::test]
    async fn test_load_returns_fallback_on_error() {
        let snapshot = load(&FailingSource).await;
        assert_eq!(&snapshot, fallback_snapshot());
    }

    #[tokio::test]
    async fn test_load_returns_source_snapshot_verbatim() {
        let live = PortfolioSnapshot {
            skills: vec![SkillGroup {
                name: "Rust".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let snapshot = load(&FixedSource(live.clone())).await;
        assert_eq!(snapshot, live);
    }

    #[tokio::test]
    async fn test_http_non_success_status_falls_back() {
        let app = Router::new().route(
            "/api/portfolio/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = serve(app).await;
        let source = HttpPortfolioSource::new(base, ApiLayout::Aggregate);
        assert!(matches!(
            source.fetch().await,
            Err(LoadError::Status { status: 500, .. })
        ));
        assert_eq!(&load(&source).await, fallback_snapshot());
    }

    #[tokio::test]
    async fn test_http_malformed_body_falls_back() {
        let app = Router::new().route("/api/portfolio/", get(|| async { "not json at all" }));
        let base = serve(app).await;
        let source = HttpPortfolioSource::new(base, ApiLayout::Aggregate);
        assert!(matches!(source.fetch().await, Err(LoadError::Parse(_))));
        assert_eq!(&load(&source).await, fallback_snapshot());
    }

    #[tokio::test]
    async fn test_http_connection_refused_falls_back() {
        // Grab a free port, then close it so the request is refused.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let source = HttpPortfolioSource::new(format!("http://{addr}/api"), ApiLayout::Aggregate);
        assert!(matches!(source.fetch().await, Err(LoadError::Http(_))));
        assert_eq!(&load(&source).await, fallback_snapshot());
    }

    #[tokio::test]
    async fn test_http_aggregate_success() {
        let app = Router::new().route(
            "/api/portfolio/",
            get(|| async {
                Json(json!({
                    "profile": {"full_name": "Ada", "social_links": []},
                    "skills": [],
                    "projects": [{"title": "Engine", "is_published": true}],
                    "education": []
                }))
            }),
        );
        let base = serve(app).await;
        let snapshot = load(&HttpPortfolioSource::new(format!("{base}/"), ApiLayout::Aggregate)).await;
        assert_eq!(
            snapshot.profile.unwrap().full_name.as_deref(),
            Some("Ada")
        );
        assert_eq!(snapshot.projects.len(), 1);
        assert_eq!(snapshot.experiences, None);
    }

    fn per_entity_app(fail_interests: bool) -> Router {
        let empty = || async { Json(json!({"count": 0, "next": null, "previous": null, "results": []})) };
        let router = Router::new()
            .route(
                "/api/profile/",
                get(|| async { Json(json!({"results": [{"full_name": "Ada"}]})) }),
            )
            .route("/api/skills/", get(empty))
            .route("/api/education/", get(empty))
            .route("/api/experiences/", get(empty))
            .route("/api/certifications/", get(empty))
            .route("/api/languages/", get(empty))
            .route("/api/custom-sections/", get(empty))
            .route(
                "/api/projects/",
                get(|axum::extract::Host(host): axum::extract::Host| async move {
                    Json(json!({
                        "count": 2,
                        "next": format!("http://{host}/api/projects/page2/"),
                        "results": [{"title": "One"}]
                    }))
                }),
            )
            .route(
                "/api/projects/page2/",
                get(|| async { Json(json!({"count": 2, "next": null, "results": [{"title": "Two"}]})) }),
            );
        if fail_interests {
            router.route("/api/interests/", get(|| async { StatusCode::NOT_FOUND }))
        } else {
            router.route("/api/interests/", get(empty))
        }
    }

    #[tokio::test]
    async fn test_per_entity_assembles_all_pages() {
        let base = serve(per_entity_app(false)).await;
        let source = HttpPortfolioSource::new(base, ApiLayout::PerEntity);
        let snapshot = source.fetch().await.unwrap();
        let titles: Vec<&str> = snapshot.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
        assert_eq!(snapshot.profile.unwrap().full_name.as_deref(), Some("Ada"));
        assert_eq!(snapshot.interests, Some(vec![]));
    }

    #[tokio::test]
    async fn test_per_entity_single_failure_discards_everything() {
        let base = serve(per_entity_app(true)).await;
        let source = HttpPortfolioSource::new(base, ApiLayout::PerEntity);
        assert_eq!(&load(&source).await, fallback_snapshot());
    }

    #[test]
    fn test_api_layout_from_str() {
        assert_eq!("aggregate".parse::<ApiLayout>().unwrap(), ApiLayout::Aggregate);
        assert_eq!("PER_ENTITY".parse::<ApiLayout>().unwrap(), ApiLayout::PerEntity);
        assert!("graphql".parse::<ApiLayout>().is_err());
    }
}
