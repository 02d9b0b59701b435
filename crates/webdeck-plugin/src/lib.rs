//! # webdeck-plugin
//!
//! Action registry and plugin framework for WebDeck. Provides:
//!
//! - The [`Capability`] contract plugins implement
//! - The two-shape [`ActionHandler`] (no arguments / request payload)
//! - The first-registration-wins [`ActionRegistry`]
//! - Directory discovery and isolated loading of native plugin libraries
//! - The [`export_capability!`] macro plugin crates use to expose themselves

pub mod capability;
pub mod descriptor;
pub mod error;
pub mod ffi;
pub mod handler;
pub mod loader;
pub mod macros;
pub mod prelude;
pub mod registry;

pub use capability::{Arity, Capability, OperationSpec, PluginMetadata};
pub use descriptor::PluginDescriptor;
pub use error::LoadError;
pub use handler::{ActionHandler, HandlerOutput};
pub use loader::{PluginLoader, register_capability};
pub use registry::{ActionOrigin, ActionRegistry, RegisteredAction};
