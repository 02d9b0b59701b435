//! Plugin system configuration.

use serde::{Deserialize, Serialize};

/// Plugin system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Directory containing plugin shared libraries.
    #[serde(default = "default_plugin_directory")]
    pub directory: String,
    /// Whether to load plugins on startup.
    #[serde(default = "default_true")]
    pub auto_load: bool,
    /// Files whose name starts with this prefix are never loaded.
    #[serde(default = "default_exclude_prefix")]
    pub exclude_prefix: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            directory: default_plugin_directory(),
            auto_load: true,
            exclude_prefix: default_exclude_prefix(),
        }
    }
}

fn default_plugin_directory() -> String {
    "./plugins".to_string()
}

fn default_exclude_prefix() -> String {
    "_".to_string()
}

fn default_true() -> bool {
    true
}
