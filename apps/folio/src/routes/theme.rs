use axum::{extract::State, Json};
use serde::Serialize;

use crate::controllers::theme::Theme;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// POST /api/theme/toggle
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
) -> Result<Json<ThemeResponse>, AppError> {
    let mut page = state.page.lock().await;
    let page = &mut *page;
    let theme = page.theme.toggle(&mut page.document).await?;
    Ok(Json(ThemeResponse { theme }))
}
