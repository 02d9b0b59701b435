//! # webdeck-core
//!
//! Core crate for WebDeck. Contains the action and button types, the
//! collaborator traits consumed by the dispatcher (notification sink,
//! OS action executor, button store), configuration schemas, the action
//! name normalizer, and the unified error system.
//!
//! This crate has **no** internal dependencies on other WebDeck crates.

pub mod config;
pub mod error;
pub mod naming;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{ActionError, AppError};
pub use naming::normalize;
pub use result::AppResult;
