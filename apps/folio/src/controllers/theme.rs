//! Light/dark theme, persisted across restarts under the `"theme"` key.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::view::document::Document;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The toggle shows the theme you would switch to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Persistence
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("theme store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("theme store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key-value persistence for UI preferences.
#[async_trait]
pub trait ThemeStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, ThemeStoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), ThemeStoreError>;
}

/// A JSON object on disk. A missing file reads as empty.
pub struct FileThemeStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, ThemeStoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl ThemeStore for FileThemeStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ThemeStoreError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ThemeStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_all().await?;
        entries.insert(key.to_string(), value.to_string());
        tokio::fs::write(&self.path, serde_json::to_vec_pretty(&entries)?).await?;
        debug!(path = %self.path.display(), key, value, "theme store updated");
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryThemeStore {
    entries: Mutex<BTreeMap<String, String>>,
}

#[async_trait]
impl ThemeStore for MemoryThemeStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ThemeStoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ThemeStoreError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Controller
// ────────────────────────────────────────────────────────────────────────────

pub struct ThemeController {
    store: Arc<dyn ThemeStore>,
    current: Theme,
}

impl ThemeController {
    /// Reads the stored theme (light when unset or unreadable) and applies it.
    pub async fn init(store: Arc<dyn ThemeStore>, doc: &mut Document) -> Self {
        let current = match store.get(THEME_KEY).await {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e: String| {
                warn!("Ignoring stored theme: {e}");
                Theme::Light
            }),
            Ok(None) => Theme::Light,
            Err(e) => {
                warn!("Theme store unreadable, defaulting to light: {e}");
                Theme::Light
            }
        };
        apply_theme(doc, current);
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme, persists it, then applies it. On a persistence
    /// failure nothing changes.
    pub async fn toggle(&mut self, doc: &mut Document) -> Result<Theme, ThemeStoreError> {
        let next = self.current.toggled();
        self.store.set(THEME_KEY, next.as_str()).await?;
        self.current = next;
        apply_theme(doc, next);
        Ok(next)
    }
}

fn apply_theme(doc: &mut Document, theme: Theme) {
    doc.set_attr("html", "data-theme", theme.as_str());
    doc.set_attr("#theme-toggle i", "class", theme.icon_class());
}
