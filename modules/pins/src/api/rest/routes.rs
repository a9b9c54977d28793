use std::sync::Arc;

use axum::{
    routing::{get, put},
    Extension, Router,
};

use crate::api::rest::{handlers, openapi};
use crate::domain::service::Service;

pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route("/pins/{id}", get(handlers::get_pin))
        .route(
            "/pins/{id}/save",
            put(handlers::save_pin).delete(handlers::unsave_pin),
        )
        .route("/pins/{id}/comments", put(handlers::add_comment))
        .route("/pins/{id}/tags", put(handlers::update_tags))
        .route("/openapi.json", get(openapi::openapi_json))
        .layer(Extension(service))
}
