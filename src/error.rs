use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Failed to send email")]
    Delivery(#[source] crate::adapters::mail::MailError),
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => {
                tracing::debug!(message = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            Self::MissingFields => {
                tracing::debug!("Submission rejected: missing required fields");
                (StatusCode::BAD_REQUEST, "Missing required fields".to_string())
            }
            Self::InvalidEmailFormat => {
                tracing::debug!("Submission rejected: invalid email format");
                (StatusCode::BAD_REQUEST, "Invalid email format".to_string())
            }
            Self::Delivery(e) => {
                tracing::error!(error = %e, "Email delivery failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email".to_string())
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
