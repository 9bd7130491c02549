use crate::application::auth::RequiredContext;
use crate::application::http::product::validators::ProductValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use beautyscan_core::domain::product::entities::Product;
use beautyscan_core::domain::product::ports::ProductService;
use beautyscan_core::domain::product::value_objects::CreateProductInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateProductResponse {
    pub data: Product,
}

#[utoipa::path(
    post,
    path = "",
    tag = "product",
    summary = "Create catalog product",
    description = "Adds a product to the catalog. Administrators only; barcodes are unique.",
    responses(
        (status = 201, body = CreateProductResponse),
        (status = 400, description = "Invalid fields or barcode already in the catalog"),
        (status = 403, description = "Caller is not an administrator")
    ),
    request_body = ProductValidator
)]
pub async fn create_product(
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
    ValidateJson(payload): ValidateJson<ProductValidator>,
) -> Result<Response<CreateProductResponse>, ApiError> {
    let product = state
        .service
        .create_product(
            context,
            CreateProductInput {
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

    Ok(Response::Created(CreateProductResponse { data: product }))
}
