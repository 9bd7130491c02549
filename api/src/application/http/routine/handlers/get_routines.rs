use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use beautyscan_core::domain::routine::entities::Routine;
use beautyscan_core::domain::routine::ports::RoutineService;
use beautyscan_core::domain::routine::value_objects::GetRoutinesFilter;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetRoutinesQuery {
    /// Only steps of this routine type, e.g. `matin`
    pub routine_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRoutinesResponse {
    pub data: Vec<Routine>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "routine",
    summary = "List routine steps",
    description = "Lists routine steps grouped by routine type, in step order.",
    params(GetRoutinesQuery),
    responses(
        (status = 200, body = GetRoutinesResponse)
    ),
)]
pub async fn get_routines(
    Query(query): Query<GetRoutinesQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetRoutinesResponse>, ApiError> {
    let routines = state
        .service
        .list_routines(GetRoutinesFilter {
            routine_type: query.routine_type,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRoutinesResponse { data: routines }))
}
