//! Helpers for building handler results and reading payloads.

use serde_json::{Value, json};

use webdeck_core::error::ActionError;
use webdeck_core::types::action::Payload;

/// Builds a success result with an explicit message.
pub fn success(message: impl Into<String>) -> Value {
    json!({"status": "success", "message": message.into()})
}

/// Builds an error result with an explicit message.
///
/// Use this when the operation ran but did not achieve its goal; return
/// an [`ActionError`] when it could not run at all.
pub fn error(message: impl Into<String>) -> Value {
    json!({"status": "error", "message": message.into()})
}

/// Reads a required string field from the request payload.
pub fn required_str<'a>(payload: Option<&'a Payload>, field: &str) -> Result<&'a str, ActionError> {
    payload
        .and_then(|payload| payload.get(field))
        .and_then(Value::as_str)
        .ok_or_else(|| ActionError::invalid_payload(field))
}
