use std::sync::Arc;

use tokio::sync::Mutex;

use crate::bootstrap::Ready;
use crate::config::Config;
use crate::contact::ContactTransport;
use crate::models::portfolio::PortfolioSnapshot;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after bootstrap.
    pub snapshot: Arc<PortfolioSnapshot>,
    /// The rendered page and its controllers. Theme toggles go through here.
    pub page: Arc<Mutex<Ready>>,
    pub contact: Arc<dyn ContactTransport>,
}

impl AppState {
    pub fn new(config: Config, ready: Ready, contact: Arc<dyn ContactTransport>) -> Self {
        Self {
            config,
            snapshot: ready.snapshot.clone(),
            page: Arc::new(Mutex::new(ready)),
            contact,
        }
    }
}
