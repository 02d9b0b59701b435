//! Action request payloads and normalized action results.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request payload handed to payload-taking handlers: the request object
/// without its `action` field.
pub type Payload = serde_json::Map<String, Value>;

/// Outcome status reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    /// The action ran to completion.
    Success,
    /// The action failed or could not be resolved.
    Error,
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Normalized result returned to the client for every action request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    /// Success or error.
    pub status: ActionStatus,
    /// Human-readable message.
    pub message: String,
}

impl ActionResult {
    /// Creates a success result.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ActionStatus::Success,
            message: message.into(),
        }
    }

    /// Creates an error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ActionStatus::Error,
            message: message.into(),
        }
    }

    /// Returns whether the status is `success`.
    pub fn is_success(&self) -> bool {
        self.status == ActionStatus::Success
    }

    /// Normalizes the raw value returned by a handler for `action`.
    ///
    /// An object carrying a `status` field is taken as the handler's own
    /// result: `"success"` maps to success and any other status to error.
    /// A missing message is synthesized from the action name. Any other
    /// value (including `null`) means the handler reported nothing and is
    /// treated as a success.
    pub fn from_handler_output(action: &str, output: &Value) -> Self {
        let Some(status) = output.as_object().and_then(|obj| obj.get("status")) else {
            return Self::success(format!("{action} executed."));
        };

        let status = match status.as_str() {
            Some("success") => ActionStatus::Success,
            _ => ActionStatus::Error,
        };

        let message = match output.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(Value::Null) | None => match status {
                ActionStatus::Success => format!("{action} executed."),
                ActionStatus::Error => format!("{action} failed."),
            },
            Some(other) => other.to_string(),
        };

        Self { status, message }
    }
}

impl From<ActionResult> for Value {
    fn from(result: ActionResult) -> Self {
        serde_json::json!({
            "status": result.status,
            "message": result.message,
        })
    }
}

/// Media transport keys understood by the OS action executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKey {
    /// Toggle play/pause.
    PlayPause,
    /// Toggle system audio mute.
    ToggleMute,
    /// Skip to the next track.
    NextTrack,
    /// Go back to the previous track.
    PreviousTrack,
}

impl MediaKey {
    /// Message reported when the key press succeeded.
    pub fn success_message(self) -> &'static str {
        match self {
            Self::PlayPause => "Toggled play/pause.",
            Self::ToggleMute => "Toggled mute.",
            Self::NextTrack => "Skipped to next track.",
            Self::PreviousTrack => "Skipped to previous track.",
        }
    }
}
