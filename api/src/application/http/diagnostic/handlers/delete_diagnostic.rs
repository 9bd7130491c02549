use crate::application::auth::RequiredContext;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use beautyscan_core::domain::diagnostic::ports::DiagnosticService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteDiagnosticResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{diagnostic_id}",
    tag = "diagnostic",
    summary = "Delete a diagnostic",
    description = "Deletes a diagnostic. Allowed for its owner and for administrators.",
    params(
        ("diagnostic_id" = Uuid, Path, description = "Diagnostic ID"),
    ),
    responses(
        (status = 200, body = DeleteDiagnosticResponse),
        (status = 403, description = "Neither owner nor administrator"),
        (status = 404, description = "Diagnostic not found")
    ),
)]
pub async fn delete_diagnostic(
    Path(diagnostic_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
) -> Result<Response<DeleteDiagnosticResponse>, ApiError> {
    state
        .service
        .delete_diagnostic(context, diagnostic_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteDiagnosticResponse {
        message: "Diagnostic deleted successfully".to_string(),
    }))
}
