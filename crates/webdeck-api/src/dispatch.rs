//! Action dispatcher.
//!
//! Turns a raw `POST /` body into an [`ActionResult`]: decode, resolve the
//! normalized identifier against the frozen registry, run the handler on
//! the blocking pool, normalize what it returned. Every stage failure is
//! answered with an error result; nothing here can take the server down.

use std::sync::Arc;

use axum::http::StatusCode;
use tracing::{debug, error, info, warn};

use webdeck_core::naming::normalize;
use webdeck_core::traits::NotificationSink;
use webdeck_core::types::action::ActionResult;
use webdeck_core::types::notification::Notification;
use webdeck_plugin::{ActionOrigin, ActionRegistry};

use crate::dto::request::ActionRequest;

/// Message returned for undecodable bodies.
pub const INVALID_JSON: &str = "Invalid JSON.";

/// Message returned for missing or unregistered actions.
pub const UNKNOWN_ACTION: &str = "Unknown action.";

/// What happened to one action request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Normalized identifier, when the request named one.
    pub action: Option<String>,
    /// Origin of the handler that ran, if one did.
    pub origin: Option<ActionOrigin>,
    /// Result returned to the client.
    pub result: ActionResult,
}

impl DispatchOutcome {
    /// HTTP status for the result: 200 on success, 400 otherwise.
    pub fn status_code(&self) -> StatusCode {
        if self.result.is_success() {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        }
    }
}

/// Resolves and runs actions against a frozen registry.
#[derive(Debug)]
pub struct Dispatcher {
    /// Registry built at startup; read-only from here on.
    registry: Arc<ActionRegistry>,
    /// Receives one notification per request.
    notifier: Arc<dyn NotificationSink>,
    /// Title used for notifications.
    title: String,
}

impl Dispatcher {
    /// Creates a dispatcher.
    pub fn new(
        registry: Arc<ActionRegistry>,
        notifier: Arc<dyn NotificationSink>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            notifier,
            title: title.into(),
        }
    }

    /// Handles one raw request body.
    pub async fn dispatch(&self, body: &[u8]) -> DispatchOutcome {
        let Ok(request) = ActionRequest::parse(body) else {
            warn!("Received invalid JSON");
            self.notify(Notification::important(&self.title, "Received invalid JSON."));
            return DispatchOutcome {
                action: None,
                origin: None,
                result: ActionResult::error(INVALID_JSON),
            };
        };

        let action = request.action.as_deref().map(normalize);
        let Some(entry) = action.as_deref().and_then(|id| self.registry.resolve(id)) else {
            warn!(action = ?request.action, "Received unknown action");
            self.notify(Notification::important(&self.title, "Received unknown action."));
            return DispatchOutcome {
                action,
                origin: None,
                result: ActionResult::error(UNKNOWN_ACTION),
            };
        };

        // Resolved above, so the identifier is present.
        let identifier = action.clone().unwrap_or_default();
        debug!(action = %identifier, origin = %entry.origin, "Dispatching action");

        let handler = entry.handler.clone();
        let payload = request.payload;
        let joined = tokio::task::spawn_blocking(move || handler.invoke(&payload)).await;

        let result = match joined {
            Ok(Ok(value)) => ActionResult::from_handler_output(&identifier, &value),
            Ok(Err(e)) => {
                warn!(action = %identifier, error = %e, "Action handler failed");
                ActionResult::error(format!("Failed to execute {identifier}: {e}"))
            }
            Err(e) => {
                error!(action = %identifier, error = %e, "Action handler panicked");
                ActionResult::error(format!("Failed to execute {identifier}: handler panicked."))
            }
        };

        if result.is_success() {
            info!(action = %identifier, message = %result.message, "Action executed");
            self.notify(Notification::info(&self.title, &result.message));
        } else {
            warn!(action = %identifier, message = %result.message, "Action returned an error");
            self.notify(Notification::important(&self.title, &result.message));
        }

        DispatchOutcome {
            action,
            origin: Some(entry.origin.clone()),
            result,
        }
    }

    /// Sends a notification without waiting for it.
    pub fn notify(&self, notification: Notification) {
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(e) = notifier.notify(notification).await {
                warn!(error = %e, "Failed to deliver notification");
            }
        });
    }
}
