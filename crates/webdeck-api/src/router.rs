//! Route definitions for the WebDeck HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use std::sync::Arc;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::{OptionsHeaders, build_cors_layer};
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    let options = Arc::new(OptionsHeaders::from_config(&state.config.server.cors));

    Router::new()
        .merge(discovery_routes())
        .merge(layout_routes())
        .merge(action_routes())
        .fallback(handlers::fallback::not_found)
        .layer(axum_middleware::from_fn_with_state(
            options,
            middleware::cors::answer_options,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Discovery and liveness
fn discovery_routes() -> Router<AppState> {
    Router::new()
        .route("/discover", get(handlers::discovery::discover))
        .route("/status", get(handlers::discovery::status))
        .route("/plugins", get(handlers::plugins::list_plugins))
}

/// Button layout
fn layout_routes() -> Router<AppState> {
    Router::new()
        .route("/buttons", get(handlers::buttons::list_buttons))
        .route("/reload", post(handlers::buttons::reload))
}

/// Action execution
fn action_routes() -> Router<AppState> {
    Router::new().route("/", post(handlers::action::dispatch_action))
}
