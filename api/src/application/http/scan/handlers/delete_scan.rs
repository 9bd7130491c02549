use crate::application::auth::RequiredContext;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use beautyscan_core::domain::product_analysis::ports::ScanHistoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteScanResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{scan_id}",
    tag = "scan",
    summary = "Delete a scan",
    description = "Removes one entry of the caller's own scan history.",
    params(
        ("scan_id" = Uuid, Path, description = "Scan ID"),
    ),
    responses(
        (status = 200, body = DeleteScanResponse),
        (status = 403, description = "The scan belongs to someone else"),
        (status = 404, description = "Scan not found")
    ),
)]
pub async fn delete_scan(
    Path(scan_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
) -> Result<Response<DeleteScanResponse>, ApiError> {
    state
        .service
        .delete_scan(context, scan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteScanResponse {
        message: "Scan deleted successfully".to_string(),
    }))
}
