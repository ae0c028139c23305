//! Router assembly for the algoviz HTTP API.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with CORS and request tracing layers.
///
/// Routes use axum 0.8 `/{param}` path syntax.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/algorithms", get(handlers::algorithms::list_algorithms))
        .route("/traces", post(handlers::traces::create_trace))
        .route("/traces/{fingerprint}", get(handlers::traces::get_trace))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
