use crate::api::AppState;
use crate::api::schemas::contact::ContactForm;
use crate::error::{AppError, Result};
use axum::{Json, body::Bytes, extract::State, response::IntoResponse};
use serde_json::json;

/// Accepts a contact-form submission and runs it through the pipeline.
///
/// The body is deserialized explicitly so a malformed payload surfaces as a
/// structured 400 instead of downstream arithmetic on garbage. Spam-flagged
/// submissions respond exactly like delivered ones.
///
/// # Errors
/// Returns `AppError::BadRequest` if the body is not a JSON object of the
/// expected shape; otherwise whatever the pipeline rejects with.
pub async fn send_email(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse> {
    let form: ContactForm =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))?;

    state.contact_service.submit(form).await?;

    Ok(Json(json!({ "success": true })))
}
