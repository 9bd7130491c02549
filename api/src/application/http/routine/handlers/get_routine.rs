use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use beautyscan_core::domain::routine::entities::Routine;
use beautyscan_core::domain::routine::ports::RoutineService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRoutineResponse {
    pub data: Routine,
}

#[utoipa::path(
    get,
    path = "/{routine_id}",
    tag = "routine",
    summary = "Get routine step",
    params(
        ("routine_id" = Uuid, Path, description = "Routine ID"),
    ),
    responses(
        (status = 200, body = GetRoutineResponse),
        (status = 404, description = "Routine not found")
    ),
)]
pub async fn get_routine(
    Path(routine_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetRoutineResponse>, ApiError> {
    let routine = state
        .service
        .get_routine(routine_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRoutineResponse { data: routine }))
}
