//! Prelude for convenient imports in plugin crates.

pub use serde_json::{Value, json};

pub use webdeck_core::error::ActionError;
pub use webdeck_core::types::action::Payload;

pub use crate::capability::{Arity, Capability, OperationSpec, PluginMetadata};

pub use crate::export_capability;
