use crate::application::auth::RequiredContext;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use beautyscan_core::domain::product_analysis::entities::ProductAnalysis;
use beautyscan_core::domain::product_analysis::ports::ProductAnalysisService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An unknown barcode is not an error: `found` is false and `data` is null.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeBarcodeResponse {
    pub found: bool,
    pub data: Option<ProductAnalysis>,
}

#[utoipa::path(
    post,
    path = "/barcode/{barcode}",
    tag = "analysis",
    summary = "Analyze a product by barcode",
    description = "Looks the barcode up in Open Food Facts and analyzes the product's ingredient list.",
    params(
        ("barcode" = String, Path, description = "EAN/UPC barcode"),
    ),
    responses(
        (status = 200, body = AnalyzeBarcodeResponse)
    ),
)]
pub async fn analyze_barcode(
    Path(barcode): Path<String>,
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
) -> Result<Response<AnalyzeBarcodeResponse>, ApiError> {
    let analysis = state
        .service
        .analyze_barcode(context, barcode)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeBarcodeResponse {
        found: analysis.is_some(),
        data: analysis,
    }))
}
