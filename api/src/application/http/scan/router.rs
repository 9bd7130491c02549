use super::handlers::delete_scan::{__path_delete_scan, delete_scan};
use super::handlers::get_scan_stats::{__path_get_scan_stats, get_scan_stats};
use super::handlers::get_scans::{__path_get_scans, get_scans};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_scans, get_scan_stats, delete_scan))]
pub struct ScanApiDoc;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/scans", state.args.server.root_path),
            get(get_scans),
        )
        .route(
            &format!("{}/scans/stats", state.args.server.root_path),
            get(get_scan_stats),
        )
        .route(
            &format!("{}/scans/{{scan_id}}", state.args.server.root_path),
            delete(delete_scan),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
