use crate::application::auth::RequiredContext;
use crate::application::http::analysis::validators::AnalyzeTextValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use beautyscan_core::domain::product_analysis::entities::ProductAnalysis;
use beautyscan_core::domain::product_analysis::ports::ProductAnalysisService;
use beautyscan_core::domain::product_analysis::value_objects::AnalyzeIngredientsInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeTextResponse {
    pub data: ProductAnalysis,
}

#[utoipa::path(
    post,
    path = "/text",
    tag = "analysis",
    summary = "Analyze an ingredient list",
    description = "Parses a typed ingredient list, matches it against the hazard catalog and records the scan.",
    responses(
        (status = 200, body = AnalyzeTextResponse),
        (status = 400, description = "No ingredient could be read from the text")
    ),
    request_body = AnalyzeTextValidator
)]
pub async fn analyze_text(
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
    ValidateJson(payload): ValidateJson<AnalyzeTextValidator>,
) -> Result<Response<AnalyzeTextResponse>, ApiError> {
    let analysis = state
        .service
        .analyze_ingredients(
            context,
            AnalyzeIngredientsInput {
                ingredients_text: payload.ingredients_text,
                product_name: payload.product_name,
                brand: payload.brand,
                barcode: payload.barcode,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeTextResponse { data: analysis }))
}
