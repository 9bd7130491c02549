use crate::application::auth::RequiredContext;
use crate::application::http::routine::validators::RoutineValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use beautyscan_core::domain::routine::entities::Routine;
use beautyscan_core::domain::routine::ports::RoutineService;
use beautyscan_core::domain::routine::value_objects::UpdateRoutineInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateRoutineResponse {
    pub data: Routine,
}

#[utoipa::path(
    put,
    path = "/{routine_id}",
    tag = "routine",
    summary = "Update routine step",
    description = "Replaces the fields of a routine step. Administrators only.",
    params(
        ("routine_id" = Uuid, Path, description = "Routine ID"),
    ),
    responses(
        (status = 200, body = UpdateRoutineResponse),
        (status = 404, description = "Routine not found")
    ),
    request_body = RoutineValidator
)]
pub async fn update_routine(
    Path(routine_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
    ValidateJson(payload): ValidateJson<RoutineValidator>,
) -> Result<Response<UpdateRoutineResponse>, ApiError> {
    let routine = state
        .service
        .update_routine(
            context,
            UpdateRoutineInput {
                routine_id,
                title: payload.title,
                description: payload.description,
                step: payload.step,
                routine_type: payload.routine_type,
                order_index: payload.order_index,
                recommended_for: payload.recommended_for,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateRoutineResponse { data: routine }))
}
