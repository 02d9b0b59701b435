//! The capability contract implemented by plugins.
//!
//! A plugin unit exposes exactly one capability type. The host builds it
//! with `Default`, asks it which operations it offers, and registers each
//! exposed operation as an action under its normalized name.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use webdeck_core::error::ActionError;
use webdeck_core::types::action::Payload;

/// Operation name reserved for plugin metadata; never registered as an action.
pub const RESERVED_METADATA: &str = "metadata";

/// Prefix marking an operation as private to the plugin.
pub const PRIVATE_PREFIX: char = '_';

/// Descriptive metadata a plugin reports about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// Human-readable plugin name.
    pub name: String,
    /// Author or maintainer.
    pub author: String,
    /// Plugin version string.
    pub version: String,
    /// Short description.
    pub description: String,
}

/// Invocation shape of an operation, fixed when it is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    /// Called with no arguments.
    NoArgs,
    /// Called with the request payload.
    Payload,
}

/// An operation a capability declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSpec {
    /// Operation name as the plugin author wrote it.
    pub name: String,
    /// How the operation is called.
    pub arity: Arity,
}

impl OperationSpec {
    /// Declares an operation that takes no arguments.
    pub fn no_args(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arity: Arity::NoArgs,
        }
    }

    /// Declares an operation that receives the request payload.
    pub fn with_payload(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arity: Arity::Payload,
        }
    }

    /// Returns whether this operation may be registered as an action.
    ///
    /// Empty names, the reserved `metadata` name, and names starting with
    /// `_` stay internal to the plugin.
    pub fn is_exposed(&self) -> bool {
        !self.name.is_empty()
            && self.name != RESERVED_METADATA
            && !self.name.starts_with(PRIVATE_PREFIX)
    }
}

/// Trait implemented by every plugin capability.
///
/// One instance exists per loaded unit and lives for the rest of the
/// process; `invoke` may be called concurrently from several requests.
pub trait Capability: Send + Sync + 'static {
    /// Returns plugin metadata.
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata::default()
    }

    /// Returns the operations this capability offers.
    fn operations(&self) -> Vec<OperationSpec>;

    /// Runs `operation`.
    ///
    /// `payload` is `Some` exactly when the operation was declared with
    /// [`Arity::Payload`]. The returned value is normalized by the
    /// dispatcher: return `{"status": ..., "message": ...}` to control the
    /// response, or anything else for a default success message.
    fn invoke(&self, operation: &str, payload: Option<&Payload>) -> Result<Value, ActionError>;
}
