//! Built-in actions.
//!
//! Registered before any plugin, so a plugin operation that normalizes to
//! one of these identifiers is always rejected.

use std::sync::Arc;

use serde_json::Value;

use webdeck_core::error::ActionError;
use webdeck_core::traits::ActionExecutor;
use webdeck_core::types::action::{ActionResult, MediaKey, Payload};
use webdeck_plugin::{ActionHandler, ActionOrigin, ActionRegistry};

/// Identifiers of the built-in actions, in registration order.
pub const BUILTIN_ACTIONS: [&str; 8] = [
    "example",
    "open_app",
    "toggle_mute",
    "pause_media",
    "skip_track",
    "previous_track",
    "open_url",
    "lock_screen",
];

/// Payload field holding the target of `open_app` and `open_url`.
const PATH_FIELD: &str = "path";

fn target(payload: &Payload) -> Result<&str, ActionError> {
    payload
        .get(PATH_FIELD)
        .and_then(Value::as_str)
        .filter(|path| !path.is_empty())
        .ok_or_else(|| ActionError::invalid_payload(PATH_FIELD))
}

fn media(executor: &Arc<dyn ActionExecutor>, key: MediaKey) -> ActionHandler {
    let executor = Arc::clone(executor);
    ActionHandler::no_args(move || Ok(executor.media(key).into()))
}

/// Registers every built-in action. Returns how many were accepted.
pub fn register_builtins(registry: &mut ActionRegistry, executor: Arc<dyn ActionExecutor>) -> usize {
    let handlers: [(&str, ActionHandler); 8] = [
        ("example", {
            let executor = Arc::clone(&executor);
            ActionHandler::no_args(move || {
                let shown =
                    executor.show_message("Test Action", "This is a test action from WebDeck.");
                let result = if shown.is_success() {
                    ActionResult::success("Opened example message box.")
                } else {
                    shown
                };
                Ok(result.into())
            })
        }),
        ("open_app", {
            let executor = Arc::clone(&executor);
            ActionHandler::with_payload(move |payload| {
                Ok(executor.open_application(target(payload)?).into())
            })
        }),
        ("toggle_mute", media(&executor, MediaKey::ToggleMute)),
        ("pause_media", media(&executor, MediaKey::PlayPause)),
        ("skip_track", media(&executor, MediaKey::NextTrack)),
        ("previous_track", media(&executor, MediaKey::PreviousTrack)),
        ("open_url", {
            let executor = Arc::clone(&executor);
            ActionHandler::with_payload(move |payload| {
                Ok(executor.open_url(target(payload)?).into())
            })
        }),
        ("lock_screen", {
            let executor = Arc::clone(&executor);
            ActionHandler::no_args(move || Ok(executor.lock_session().into()))
        }),
    ];

    let mut accepted = 0;
    for (id, handler) in handlers {
        if registry.register(id, ActionOrigin::Builtin, handler) {
            accepted += 1;
        }
    }
    accepted
}
