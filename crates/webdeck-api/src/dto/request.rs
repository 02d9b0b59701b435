//! Request DTOs.

use serde_json::Value;

use webdeck_core::types::action::Payload;

/// Name of the field carrying the action identifier.
pub const ACTION_FIELD: &str = "action";

/// A decoded `POST /` body.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    /// Raw action identifier; `None` when missing or not a string.
    pub action: Option<String>,
    /// The request object without its `action` field.
    pub payload: Payload,
}

/// The body is not a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidJson;

impl ActionRequest {
    /// Decodes a request body. An empty body is treated as `{}`.
    pub fn parse(body: &[u8]) -> Result<Self, InvalidJson> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self {
                action: None,
                payload: Payload::new(),
            });
        }

        let Ok(Value::Object(mut payload)) = serde_json::from_slice::<Value>(body) else {
            return Err(InvalidJson);
        };

        let action = match payload.remove(ACTION_FIELD) {
            Some(Value::String(action)) => Some(action),
            _ => None,
        };

        Ok(Self { action, payload })
    }
}
