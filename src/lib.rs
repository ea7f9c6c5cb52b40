pub mod config;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod sanitize;
pub mod state;
pub mod upstream;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};

use crate::state::AppState;

// Hard cap on request bodies; anything larger is refused before parsing.
pub const MAX_BODY_BYTES: usize = 1_048_576;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .route(
            "/generateWorkout",
            post(handlers::generate_handler).route_layer(middleware::from_fn_with_state(
                state.clone(),
                handlers::rate_limit,
            )),
        )
        .fallback(handlers::static_handler)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
