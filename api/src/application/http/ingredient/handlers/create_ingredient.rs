use crate::application::auth::RequiredContext;
use crate::application::http::ingredient::validators::IngredientValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use beautyscan_core::domain::ingredient::entities::Ingredient;
use beautyscan_core::domain::ingredient::ports::IngredientService;
use beautyscan_core::domain::ingredient::value_objects::CreateIngredientInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    post,
    path = "",
    tag = "ingredient",
    summary = "Create catalog ingredient",
    description = "Adds an ingredient to the hazard catalog. Administrators only.",
    responses(
        (status = 201, body = CreateIngredientResponse),
        (status = 403, description = "Caller is not an administrator")
    ),
    request_body = IngredientValidator
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
    ValidateJson(payload): ValidateJson<IngredientValidator>,
) -> Result<Response<CreateIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .create_ingredient(
            context,
            CreateIngredientInput {
                name: payload.name,
                hazard_tier: payload.hazard_tier,
                category: payload.category,
                description: payload.description,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateIngredientResponse { data: ingredient }))
}
