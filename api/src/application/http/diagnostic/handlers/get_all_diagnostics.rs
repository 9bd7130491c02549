use crate::application::auth::RequiredContext;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use beautyscan_core::domain::diagnostic::entities::{Diagnostic, DiagnosticKind};
use beautyscan_core::domain::diagnostic::ports::DiagnosticService;
use beautyscan_core::domain::diagnostic::value_objects::GetDiagnosticsFilter;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetAllDiagnosticsQuery {
    /// Restrict to one questionnaire kind
    pub kind: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl TryFrom<GetAllDiagnosticsQuery> for GetDiagnosticsFilter {
    type Error = ApiError;

    fn try_from(query: GetAllDiagnosticsQuery) -> Result<Self, Self::Error> {
        let kind = query
            .kind
            .filter(|kind| !kind.is_empty() && kind != "all")
            .map(|kind| kind.parse::<DiagnosticKind>())
            .transpose()
            .map_err(ApiError::from)?;

        Ok(GetDiagnosticsFilter {
            kind,
            limit: query.limit,
            offset: query.offset,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAllDiagnosticsResponse {
    pub data: Vec<Diagnostic>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "admin",
    summary = "List every diagnostic",
    description = "All users' diagnostics, newest first. Administrators only.",
    params(GetAllDiagnosticsQuery),
    responses(
        (status = 200, body = GetAllDiagnosticsResponse),
        (status = 403, description = "Caller is not an administrator")
    ),
)]
pub async fn get_all_diagnostics(
    Query(query): Query<GetAllDiagnosticsQuery>,
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
) -> Result<Response<GetAllDiagnosticsResponse>, ApiError> {
    let diagnostics = state
        .service
        .list_all_diagnostics(context, GetDiagnosticsFilter::try_from(query)?)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAllDiagnosticsResponse { data: diagnostics }))
}
