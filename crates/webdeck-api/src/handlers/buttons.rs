//! Button layout handlers.

use axum::Json;
use axum::extract::State;

use webdeck_core::types::action::ActionResult;
use webdeck_core::types::button::ButtonDescriptor;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /buttons
pub async fn list_buttons(State(state): State<AppState>) -> Json<Vec<ButtonDescriptor>> {
    Json(state.board.current().await)
}

/// POST /reload
pub async fn reload(State(state): State<AppState>) -> Result<Json<ActionResult>, ApiError> {
    let count = state.board.reload().await?;
    Ok(Json(ActionResult::success(format!("Reloaded {count} buttons."))))
}
