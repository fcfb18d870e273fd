pub mod contact;
pub mod health;
pub mod page;
pub mod theme;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_page))
        .route("/health", get(health::health_handler))
        .route("/api/portfolio", get(page::handle_portfolio))
        .route("/contact", post(contact::handle_contact_form))
        .route("/api/contact", post(contact::handle_contact))
        .route("/api/theme/toggle", post(theme::handle_toggle_theme))
        .fallback(not_found)
        .with_state(state)
}
