//! # webdeck-plugin-sdk
//!
//! SDK for developing WebDeck plugins.
//!
//! A plugin is a `cdylib` crate exposing one capability type. Each
//! operation it declares becomes an action, registered under the
//! snake_case form of its name (`MuteForegroundApp` is requested as
//! `mute_foreground_app`).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use webdeck_plugin_sdk::prelude::*;
//!
//! #[derive(Default)]
//! struct OpenFolder;
//!
//! impl Capability for OpenFolder {
//!     fn metadata(&self) -> PluginMetadata {
//!         PluginMetadata {
//!             name: "Open Folder".to_string(),
//!             author: "Developer".to_string(),
//!             version: "1.0".to_string(),
//!             description: "Opens a folder in the file manager".to_string(),
//!         }
//!     }
//!
//!     fn operations(&self) -> Vec<OperationSpec> {
//!         vec![OperationSpec::with_payload("OpenFolder")]
//!     }
//!
//!     fn invoke(&self, _operation: &str, payload: Option<&Payload>) -> Result<Value, ActionError> {
//!         let path = required_str(payload, "path")?;
//!         Ok(success(format!("Opened {path}")))
//!     }
//! }
//!
//! export_capability!(OpenFolder);
//! ```
//!
//! Plugins must be built with the same Rust toolchain and the same
//! `webdeck-plugin` version as the server; mismatched units are rejected
//! at load time.

pub mod response;

pub use response::{error, required_str, success};

/// Prelude for convenient imports.
pub mod prelude {
    pub use webdeck_plugin::prelude::*;

    pub use crate::response::{error, required_str, success};
}
