use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use beautyscan_core::domain::health::entities::DatabaseHealthStatus;
use beautyscan_core::domain::health::ports::HealthCheckService;

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    description = "Pings the database and reports the round-trip time.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 500, description = "The database cannot be reached")
    ),
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
