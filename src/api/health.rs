use axum::{http::StatusCode, response::IntoResponse};

/// Liveness probe: returns 200 OK as long as the server is running. The
/// service holds no backends worth a deeper readiness check.
pub async fn livez() -> impl IntoResponse {
    StatusCode::OK
}
