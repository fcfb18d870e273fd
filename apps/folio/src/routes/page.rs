use axum::{extract::State, response::Html, Json};

use crate::models::portfolio::PortfolioSnapshot;
use crate::state::AppState;

/// GET /
pub async fn handle_page(State(state): State<AppState>) -> Html<String> {
    Html(state.page.lock().await.document.to_html())
}

/// GET /api/portfolio
pub async fn handle_portfolio(State(state): State<AppState>) -> Json<PortfolioSnapshot> {
    Json(state.snapshot.as_ref().clone())
}
