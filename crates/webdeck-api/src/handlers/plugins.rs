//! Loaded plugin listing.

use axum::Json;
use axum::extract::State;

use webdeck_plugin::PluginDescriptor;

use crate::state::AppState;

/// GET /plugins
pub async fn list_plugins(State(state): State<AppState>) -> Json<Vec<PluginDescriptor>> {
    Json(state.plugins.as_ref().clone())
}
