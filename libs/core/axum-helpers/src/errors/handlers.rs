use axum::http::StatusCode;

/// Fallback for unmatched routes: 404 with no body.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
