use crate::application::auth::RequiredContext;
use crate::application::http::product::validators::ProductValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use beautyscan_core::domain::product::entities::Product;
use beautyscan_core::domain::product::ports::ProductService;
use beautyscan_core::domain::product::value_objects::UpdateProductInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateProductResponse {
    pub data: Product,
}

#[utoipa::path(
    put,
    path = "/{product_id}",
    tag = "product",
    summary = "Update catalog product",
    description = "Replaces the fields of a catalog product. Administrators only.",
    params(
        ("product_id" = Uuid, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = UpdateProductResponse),
        (status = 404, description = "Product not found")
    ),
    request_body = ProductValidator
)]
pub async fn update_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
    ValidateJson(payload): ValidateJson<ProductValidator>,
) -> Result<Response<UpdateProductResponse>, ApiError> {
    let product = state
        .service
        .update_product(
            context,
            UpdateProductInput {
                product_id,
                name: payload.name,
                brand: payload.brand,
                barcode: payload.barcode,
                product_type: payload.product_type,
                category: payload.category,
                ingredients: payload.ingredients,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProductResponse { data: product }))
}
