use crate::application::auth::RequiredContext;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use beautyscan_core::domain::ingredient::ports::IngredientService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteIngredientResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Delete catalog ingredient",
    description = "Removes an ingredient from the hazard catalog. Administrators only.",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 200, body = DeleteIngredientResponse)
    ),
)]
pub async fn delete_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
) -> Result<Response<DeleteIngredientResponse>, ApiError> {
    state
        .service
        .delete_ingredient(context, ingredient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteIngredientResponse {
        message: "Ingredient deleted successfully".to_string(),
    }))
}
