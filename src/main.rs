//! WebDeck Server: local HTTP control surface.
//!
//! Main entry point that loads configuration, initializes logging and
//! hands over to the API crate.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use webdeck_core::config::AppConfig;

/// Command-line arguments, each layered over the file configuration.
#[derive(Debug, Parser)]
#[command(name = "webdeck-server", version, about = "WebDeck local control surface server")]
struct Cli {
    /// Directory holding `default.toml` and `{env}.toml`.
    #[arg(long, env = "WEBDECK_CONFIG_DIR", default_value = "config")]
    config_dir: String,

    /// Configuration environment overlay.
    #[arg(long, env = "WEBDECK_ENV", default_value = "development")]
    env: String,

    /// Listening port.
    #[arg(short, long, env = "WEBDECK_PORT")]
    port: Option<u16>,

    /// Plugin directory.
    #[arg(long, env = "WEBDECK_PLUGINS")]
    plugins: Option<String>,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(plugins) = &self.plugins {
            config.plugins.directory = plugins.clone();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config_dir, &cli.env)
        .with_context(|| format!("Failed to load configuration from '{}'", cli.config_dir))?;
    cli.apply(&mut config);

    init_logging(&config);
    tracing::info!(
        config_dir = %cli.config_dir,
        env = %cli.env,
        "Configuration loaded"
    );

    webdeck_api::run_server(config)
        .await
        .context("WebDeck server failed")
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
