use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use beautyscan_core::domain::ingredient::entities::Ingredient;
use beautyscan_core::domain::ingredient::ports::IngredientService;
use beautyscan_core::domain::ingredient::value_objects::GetIngredientsFilter;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetIngredientsQuery {
    /// Case-insensitive part of the ingredient name
    pub search: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientsResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "ingredient",
    summary = "List catalog ingredients",
    description = "Lists hazard catalog entries ordered by name.",
    params(GetIngredientsQuery),
    responses(
        (status = 200, body = GetIngredientsResponse)
    ),
)]
pub async fn get_ingredients(
    Query(query): Query<GetIngredientsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetIngredientsResponse>, ApiError> {
    let ingredients = state
        .service
        .list_ingredients(GetIngredientsFilter {
            search: query.search,
            limit: query.limit,
            offset: query.offset,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientsResponse { data: ingredients }))
}
