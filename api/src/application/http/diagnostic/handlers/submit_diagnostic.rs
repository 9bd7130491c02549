use crate::application::auth::RequiredContext;
use crate::application::http::server::api_entities::api_error::{ApiError, JsonBody};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use beautyscan_core::domain::authentication::value_objects::AuthorizationContext;
use beautyscan_core::domain::diagnostic::entities::Diagnostic;
use beautyscan_core::domain::diagnostic::ports::DiagnosticService;
use beautyscan_core::domain::diagnostic::value_objects::{
    BeautyAnswers, DiagnosticAnswers, HairAnswers, SkinAnswers,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SubmitDiagnosticResponse {
    pub data: Diagnostic,
}

async fn submit(
    state: AppState,
    context: AuthorizationContext,
    answers: DiagnosticAnswers,
) -> Result<Response<SubmitDiagnosticResponse>, ApiError> {
    let diagnostic = state
        .service
        .submit_diagnostic(context, answers)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SubmitDiagnosticResponse { data: diagnostic }))
}

#[utoipa::path(
    post,
    path = "/skin",
    tag = "diagnostic",
    summary = "Submit skin questionnaire",
    description = "Scores the skin questionnaire with the built-in rules and stores the result.",
    responses(
        (status = 201, body = SubmitDiagnosticResponse),
        (status = 400, description = "Invalid answers")
    ),
    request_body = SkinAnswers
)]
pub async fn submit_skin_diagnostic(
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
    JsonBody(answers): JsonBody<SkinAnswers>,
) -> Result<Response<SubmitDiagnosticResponse>, ApiError> {
    submit(state, context, DiagnosticAnswers::Skin(answers)).await
}

#[utoipa::path(
    post,
    path = "/hair",
    tag = "diagnostic",
    summary = "Submit hair questionnaire",
    description = "Builds a hair profile with the generative model and stores it. \
                   `used_fallback` is set when the model reply was unusable.",
    responses(
        (status = 201, body = SubmitDiagnosticResponse),
        (status = 402, description = "Model gateway credits exhausted"),
        (status = 429, description = "Model gateway rate limit reached")
    ),
    request_body = HairAnswers
)]
pub async fn submit_hair_diagnostic(
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
    JsonBody(answers): JsonBody<HairAnswers>,
) -> Result<Response<SubmitDiagnosticResponse>, ApiError> {
    submit(state, context, DiagnosticAnswers::Hair(answers)).await
}

#[utoipa::path(
    post,
    path = "/beauty",
    tag = "diagnostic",
    summary = "Submit beauty questionnaire",
    description = "Selects up to three beauty profiles with the generative model and stores them.",
    responses(
        (status = 201, body = SubmitDiagnosticResponse),
        (status = 402, description = "Model gateway credits exhausted"),
        (status = 429, description = "Model gateway rate limit reached")
    ),
    request_body = BeautyAnswers
)]
pub async fn submit_beauty_diagnostic(
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
    JsonBody(answers): JsonBody<BeautyAnswers>,
) -> Result<Response<SubmitDiagnosticResponse>, ApiError> {
    submit(state, context, DiagnosticAnswers::Beauty(answers)).await
}
