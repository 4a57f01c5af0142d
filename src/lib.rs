use std::sync::Arc;

use axum::{extract::Extension, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;
pub mod telemetry;

use routes::index::index_router;
use routes::search::search_router;
use routes::users::users_router;
use store::UserStore;

/// Server context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // GET /
        .merge(index_router())
        // /user and /user/:id
        .merge(users_router())
        // POST /search
        .merge(search_router())
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}
