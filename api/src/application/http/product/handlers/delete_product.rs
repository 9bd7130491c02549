use crate::application::auth::RequiredContext;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use beautyscan_core::domain::product::ports::ProductService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteProductResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{product_id}",
    tag = "product",
    summary = "Delete catalog product",
    description = "Removes a product from the catalog. Administrators only.",
    params(
        ("product_id" = Uuid, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = DeleteProductResponse)
    ),
)]
pub async fn delete_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
) -> Result<Response<DeleteProductResponse>, ApiError> {
    state
        .service
        .delete_product(context, product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteProductResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
