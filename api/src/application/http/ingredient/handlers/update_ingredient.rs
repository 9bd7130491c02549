use crate::application::auth::RequiredContext;
use crate::application::http::ingredient::validators::IngredientValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use beautyscan_core::domain::ingredient::entities::Ingredient;
use beautyscan_core::domain::ingredient::ports::IngredientService;
use beautyscan_core::domain::ingredient::value_objects::UpdateIngredientInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    put,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Update catalog ingredient",
    description = "Replaces the fields of a catalog ingredient. Administrators only.",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 200, body = UpdateIngredientResponse),
        (status = 404, description = "Ingredient not found")
    ),
    request_body = IngredientValidator
)]
pub async fn update_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
    ValidateJson(payload): ValidateJson<IngredientValidator>,
) -> Result<Response<UpdateIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .update_ingredient(
            context,
            UpdateIngredientInput {
                ingredient_id,
                name: payload.name,
                hazard_tier: payload.hazard_tier,
                category: payload.category,
                description: payload.description,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateIngredientResponse { data: ingredient }))
}
