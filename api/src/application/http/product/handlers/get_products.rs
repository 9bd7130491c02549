use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use beautyscan_core::domain::product::entities::Product;
use beautyscan_core::domain::product::ports::ProductService;
use beautyscan_core::domain::product::value_objects::GetProductsFilter;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetProductsQuery {
    /// Case-insensitive part of the name, brand or barcode
    pub search: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProductsResponse {
    pub data: Vec<Product>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "product",
    summary = "List catalog products",
    description = "Lists catalog products, newest first.",
    params(GetProductsQuery),
    responses(
        (status = 200, body = GetProductsResponse)
    ),
)]
pub async fn get_products(
    Query(query): Query<GetProductsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetProductsResponse>, ApiError> {
    let products = state
        .service
        .list_products(GetProductsFilter {
            search: query.search,
            limit: query.limit,
            offset: query.offset,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProductsResponse { data: products }))
}
