use crate::application::auth::RequiredContext;
use crate::application::http::routine::validators::RoutineValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use beautyscan_core::domain::routine::entities::Routine;
use beautyscan_core::domain::routine::ports::RoutineService;
use beautyscan_core::domain::routine::value_objects::CreateRoutineInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateRoutineResponse {
    pub data: Routine,
}

#[utoipa::path(
    post,
    path = "",
    tag = "routine",
    summary = "Create routine step",
    description = "Adds a step to a care routine. Administrators only.",
    responses(
        (status = 201, body = CreateRoutineResponse),
        (status = 403, description = "Caller is not an administrator")
    ),
    request_body = RoutineValidator
)]
pub async fn create_routine(
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
    ValidateJson(payload): ValidateJson<RoutineValidator>,
) -> Result<Response<CreateRoutineResponse>, ApiError> {
    let routine = state
        .service
        .create_routine(
            context,
            CreateRoutineInput {
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

    Ok(Response::Created(CreateRoutineResponse { data: routine }))
}
