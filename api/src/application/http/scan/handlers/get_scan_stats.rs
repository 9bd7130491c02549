use crate::application::auth::RequiredContext;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use beautyscan_core::domain::product_analysis::entities::ScanStats;
use beautyscan_core::domain::product_analysis::ports::ScanHistoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetScanStatsResponse {
    pub data: ScanStats,
}

#[utoipa::path(
    get,
    path = "/stats",
    tag = "scan",
    summary = "Scan statistics",
    description = "Totals, distinct products, most scanned product and scans of the last seven days.",
    responses(
        (status = 200, body = GetScanStatsResponse)
    ),
)]
pub async fn get_scan_stats(
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
) -> Result<Response<GetScanStatsResponse>, ApiError> {
    let stats = state
        .service
        .scan_stats(context)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetScanStatsResponse { data: stats }))
}
