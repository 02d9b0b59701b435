//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every section has defaults so the server starts without
//! any configuration file at all.

pub mod app;
pub mod deck;
pub mod logging;
pub mod notification;
pub mod plugin;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::deck::DeckConfig;
pub use self::logging::LoggingConfig;
pub use self::notification::{NotificationBackend, NotificationConfig};
pub use self::plugin::PluginConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`WEBDECK__SERVER__PORT=9000`).
pub const ENV_PREFIX: &str = "WEBDECK";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Plugin system settings.
    pub plugins: PluginConfig,
    /// Notification settings.
    pub notifications: NotificationConfig,
    /// Button layout file settings.
    pub deck: DeckConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `{config_dir}/default.toml` with the `{config_dir}/{env}.toml`
    /// overlay and environment variables prefixed with `WEBDECK__`. Missing
    /// files are skipped.
    pub fn load(config_dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{config_dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{config_dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parses configuration from an inline TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
