//! Discovery and liveness handlers.

use axum::Json;
use axum::extract::State;

use webdeck_core::types::notification::Notification;

use crate::dto::response::{DiscoverResponse, ONLINE, StatusResponse};
use crate::state::AppState;

/// GET /discover
///
/// Announces the server to a deck client and notifies the desktop.
pub async fn discover(State(state): State<AppState>) -> Json<DiscoverResponse> {
    state.dispatcher.notify(Notification::info(
        &state.config.notifications.title,
        "Client connected!",
    ));
    tracing::info!("Client connected");

    Json(DiscoverResponse {
        status: ONLINE.to_string(),
        message: "WebDeck server is online".to_string(),
        hostname: state.hostname.to_string(),
        port: state.config.server.port,
    })
}

/// GET /status
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: ONLINE.to_string(),
        hostname: state.hostname.to_string(),
        port: state.config.server.port,
    })
}
