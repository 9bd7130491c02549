use axum::http::StatusCode;

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 204, description = "The process is running")
    ),
)]
pub async fn health_live() -> StatusCode {
    StatusCode::NO_CONTENT
}
