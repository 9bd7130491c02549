use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use beautyscan_core::domain::ingredient::entities::Ingredient;
use beautyscan_core::domain::ingredient::ports::IngredientService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    get,
    path = "/{id_or_name}",
    tag = "ingredient",
    summary = "Get catalog ingredient",
    description = "Looks an ingredient up by id, or by exact name when the segment is not a UUID.",
    params(
        ("id_or_name" = String, Path, description = "Ingredient ID or exact name"),
    ),
    responses(
        (status = 200, body = GetIngredientResponse),
        (status = 404, description = "Ingredient not found")
    ),
)]
pub async fn get_ingredient(
    Path(id_or_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .get_ingredient(id_or_name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientResponse { data: ingredient }))
}
