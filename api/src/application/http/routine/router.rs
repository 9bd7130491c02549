use super::handlers::create_routine::{__path_create_routine, create_routine};
use super::handlers::delete_routine::{__path_delete_routine, delete_routine};
use super::handlers::get_routine::{__path_get_routine, get_routine};
use super::handlers::get_routines::{__path_get_routines, get_routines};
use super::handlers::update_routine::{__path_update_routine, update_routine};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_routines,
    get_routine,
    create_routine,
    update_routine,
    delete_routine
))]
pub struct RoutineApiDoc;

pub fn routine_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/routines", state.args.server.root_path),
            get(get_routines),
        )
        .route(
            &format!("{}/routines/{{routine_id}}", state.args.server.root_path),
            get(get_routine),
        )
        .route(
            &format!("{}/routines", state.args.server.root_path),
            post(create_routine),
        )
        .route(
            &format!("{}/routines/{{routine_id}}", state.args.server.root_path),
            put(update_routine),
        )
        .route(
            &format!("{}/routines/{{routine_id}}", state.args.server.root_path),
            delete(delete_routine),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
