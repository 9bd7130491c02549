use crate::application::auth::RequiredContext;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use beautyscan_core::domain::routine::ports::RoutineService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteRoutineResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{routine_id}",
    tag = "routine",
    summary = "Delete routine step",
    description = "Removes a routine step. Administrators only.",
    params(
        ("routine_id" = Uuid, Path, description = "Routine ID"),
    ),
    responses(
        (status = 200, body = DeleteRoutineResponse)
    ),
)]
pub async fn delete_routine(
    Path(routine_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
) -> Result<Response<DeleteRoutineResponse>, ApiError> {
    state
        .service
        .delete_routine(context, routine_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteRoutineResponse {
        message: "Routine deleted successfully".to_string(),
    }))
}
