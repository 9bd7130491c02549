use super::handlers::create_product::{__path_create_product, create_product};
use super::handlers::delete_product::{__path_delete_product, delete_product};
use super::handlers::get_product::{__path_get_product, get_product};
use super::handlers::get_product_detail::{__path_get_product_detail, get_product_detail};
use super::handlers::get_products::{__path_get_products, get_products};
use super::handlers::update_product::{__path_update_product, update_product};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_products,
    get_product,
    get_product_detail,
    create_product,
    update_product,
    delete_product
))]
pub struct ProductApiDoc;

pub fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/products", state.args.server.root_path),
            get(get_products),
        )
        .route(
            &format!("{}/products/{{product_id}}", state.args.server.root_path),
            get(get_product),
        )
        .route(
            &format!("{}/products/{{product_id}}/detail", state.args.server.root_path),
            get(get_product_detail),
        )
        .route(
            &format!("{}/products", state.args.server.root_path),
            post(create_product),
        )
        .route(
            &format!("{}/products/{{product_id}}", state.args.server.root_path),
            put(update_product),
        )
        .route(
            &format!("{}/products/{{product_id}}", state.args.server.root_path),
            delete(delete_product),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
