//! Action endpoint.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;

use webdeck_core::types::action::ActionResult;

use crate::state::AppState;

/// POST /
///
/// The body is read raw so that malformed JSON is answered with the
/// normal `Invalid JSON.` result instead of an extractor rejection.
pub async fn dispatch_action(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<ActionResult>) {
    let outcome = state.dispatcher.dispatch(&body).await;
    (outcome.status_code(), Json(outcome.result))
}
