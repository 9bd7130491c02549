use super::handlers::analyze_barcode::{__path_analyze_barcode, analyze_barcode};
use super::handlers::analyze_text::{__path_analyze_text, analyze_text};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_text, analyze_barcode))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analysis/text", state.args.server.root_path),
            post(analyze_text),
        )
        .route(
            &format!("{}/analysis/barcode/{{barcode}}", state.args.server.root_path),
            post(analyze_barcode),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
