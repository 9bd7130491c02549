use crate::application::auth::RequiredContext;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use beautyscan_core::domain::diagnostic::entities::{Diagnostic, DiagnosticKind};
use beautyscan_core::domain::diagnostic::ports::DiagnosticService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetLatestDiagnosticResponse {
    pub data: Diagnostic,
}

#[utoipa::path(
    get,
    path = "/latest/{kind}",
    tag = "diagnostic",
    summary = "Latest diagnostic of a kind",
    description = "The caller's most recent result for `skin`/`peau`, `hair`/`cheveux` or `beauty`.",
    params(
        ("kind" = String, Path, description = "Questionnaire kind"),
    ),
    responses(
        (status = 200, body = GetLatestDiagnosticResponse),
        (status = 404, description = "No diagnostic of this kind yet")
    ),
)]
pub async fn get_latest_diagnostic(
    Path(kind): Path<String>,
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
) -> Result<Response<GetLatestDiagnosticResponse>, ApiError> {
    let kind = kind.parse::<DiagnosticKind>().map_err(ApiError::from)?;

    let diagnostic = state
        .service
        .get_latest_diagnostic(context, kind)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetLatestDiagnosticResponse { data: diagnostic }))
}
