use crate::application::auth::RequiredContext;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use beautyscan_core::domain::diagnostic::entities::Diagnostic;
use beautyscan_core::domain::diagnostic::ports::DiagnosticService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDiagnosticsResponse {
    pub data: Vec<Diagnostic>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "diagnostic",
    summary = "List own diagnostics",
    description = "Every questionnaire the caller submitted, newest first.",
    responses(
        (status = 200, body = GetDiagnosticsResponse)
    ),
)]
pub async fn get_diagnostics(
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
) -> Result<Response<GetDiagnosticsResponse>, ApiError> {
    let diagnostics = state
        .service
        .list_diagnostics(context)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDiagnosticsResponse { data: diagnostics }))
}
