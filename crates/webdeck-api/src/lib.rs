//! # webdeck-api
//!
//! HTTP API layer for WebDeck built on Axum.
//!
//! Provides the discovery, layout and action endpoints, the action
//! dispatcher with its built-in actions, CORS and logging middleware, and
//! error mapping.

pub mod app;
pub mod board;
pub mod builtins;
pub mod dispatch;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_registry, build_state, run_server};
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use state::AppState;
