use axum::{extract::State, http::StatusCode, response::Html, Form, Json};
use serde::Serialize;

use crate::contact::{apply_outcome, refill_form, submit, SubmitOutcome};
use crate::errors::AppError;
use crate::models::contact::ContactSubmission;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ContactResponse {
    pub message: String,
}

/// POST /api/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactSubmission>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    match submit(&form, state.contact.as_ref()).await {
        SubmitOutcome::Sent(message) => Ok((StatusCode::CREATED, Json(ContactResponse { message }))),
        SubmitOutcome::Invalid(fields) => Err(AppError::InvalidSubmission(fields)),
        SubmitOutcome::Failed(message) => Err(AppError::Upstream(message)),
    }
}

/// POST /contact
/// Target of the page's own form. Answers with a copy of the page carrying
/// the outcome; the shared page is left untouched.
pub async fn handle_contact_form(
    State(state): State<AppState>,
    Form(form): Form<ContactSubmission>,
) -> (StatusCode, Html<String>) {
    let outcome = submit(&form, state.contact.as_ref()).await;
    let mut document = state.page.lock().await.document.clone();
    apply_outcome(&mut document, &outcome);

    let status = match outcome {
        SubmitOutcome::Sent(_) => StatusCode::CREATED,
        SubmitOutcome::Invalid(_) => StatusCode::BAD_REQUEST,
        SubmitOutcome::Failed(_) => StatusCode::BAD_GATEWAY,
    };
    if status != StatusCode::CREATED {
        refill_form(&mut document, &form);
    }
    (status, Html(document.to_html()))
}
