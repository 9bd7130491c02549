use super::handlers::delete_diagnostic::{__path_delete_diagnostic, delete_diagnostic};
use super::handlers::get_all_diagnostics::{__path_get_all_diagnostics, get_all_diagnostics};
use super::handlers::get_diagnostics::{__path_get_diagnostics, get_diagnostics};
use super::handlers::get_latest_diagnostic::{
    __path_get_latest_diagnostic, get_latest_diagnostic,
};
use super::handlers::submit_diagnostic::{
    __path_submit_beauty_diagnostic, __path_submit_hair_diagnostic,
    __path_submit_skin_diagnostic, submit_beauty_diagnostic, submit_hair_diagnostic,
    submit_skin_diagnostic,
};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    submit_skin_diagnostic,
    submit_hair_diagnostic,
    submit_beauty_diagnostic,
    get_diagnostics,
    get_latest_diagnostic,
    delete_diagnostic
))]
pub struct DiagnosticApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_all_diagnostics))]
pub struct AdminDiagnosticApiDoc;

pub fn diagnostic_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/diagnostics/skin", root_path),
            post(submit_skin_diagnostic),
        )
        .route(
            &format!("{}/diagnostics/hair", root_path),
            post(submit_hair_diagnostic),
        )
        .route(
            &format!("{}/diagnostics/beauty", root_path),
            post(submit_beauty_diagnostic),
        )
        .route(
            &format!("{}/diagnostics", root_path),
            get(get_diagnostics),
        )
        .route(
            &format!("{}/diagnostics/latest/{{kind}}", root_path),
            get(get_latest_diagnostic),
        )
        .route(
            &format!("{}/diagnostics/{{diagnostic_id}}", root_path),
            delete(delete_diagnostic),
        )
        .route(
            &format!("{}/admin/diagnostics", root_path),
            get(get_all_diagnostics),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
