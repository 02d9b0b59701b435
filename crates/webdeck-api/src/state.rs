//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use webdeck_core::config::AppConfig;
use webdeck_plugin::PluginDescriptor;

use crate::board::ButtonBoard;
use crate::dispatch::Dispatcher;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Action dispatcher over the frozen registry
    pub dispatcher: Arc<Dispatcher>,
    /// Button layout
    pub board: Arc<ButtonBoard>,
    /// Plugin units loaded at startup
    pub plugins: Arc<Vec<PluginDescriptor>>,
    /// Hostname reported to clients
    pub hostname: Arc<str>,
}
