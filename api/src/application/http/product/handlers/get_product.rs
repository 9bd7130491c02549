use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use beautyscan_core::domain::product::entities::Product;
use beautyscan_core::domain::product::ports::ProductService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProductResponse {
    pub data: Product,
}

#[utoipa::path(
    get,
    path = "/{product_id}",
    tag = "product",
    summary = "Get catalog product",
    params(
        ("product_id" = Uuid, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = GetProductResponse),
        (status = 404, description = "Product not found")
    ),
)]
pub async fn get_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetProductResponse>, ApiError> {
    let product = state
        .service
        .get_product(product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProductResponse { data: product }))
}
