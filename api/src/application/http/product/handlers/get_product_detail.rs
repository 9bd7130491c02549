use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use beautyscan_core::domain::product::entities::ProductDetail;
use beautyscan_core::domain::product::ports::ProductService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProductDetailResponse {
    pub data: ProductDetail,
}

#[utoipa::path(
    get,
    path = "/{product_id}/detail",
    tag = "product",
    summary = "Get product risk detail",
    description = "Matches the product's ingredients against the hazard catalog. Low-hazard ingredients count as safe on this screen.",
    params(
        ("product_id" = Uuid, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = GetProductDetailResponse),
        (status = 404, description = "Product not found")
    ),
)]
pub async fn get_product_detail(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetProductDetailResponse>, ApiError> {
    let detail = state
        .service
        .get_product_detail(product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProductDetailResponse { data: detail }))
}
