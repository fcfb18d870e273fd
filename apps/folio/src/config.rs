use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::loader::ApiLayout;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub portfolio_api_url: String,
    pub api_layout: ApiLayout,
    pub port: u16,
    pub rust_log: String,
    pub theme_store_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            portfolio_api_url: var("PORTFOLIO_API_URL", "http://localhost:8000/api"),
            api_layout: var("API_LAYOUT", "aggregate")
                .parse()
                .map_err(|e: String| anyhow!(e))
                .context("API_LAYOUT must be 'aggregate' or 'per_entity'")?,
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
            theme_store_path: PathBuf::from(var("THEME_STORE_PATH", ".folio-theme.json")),
        })
    }
}
