//! Application builder: wires registry, collaborators and router into a
//! running server.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use webdeck_core::config::AppConfig;
use webdeck_core::error::AppError;
use webdeck_core::result::AppResult;
use webdeck_core::traits::{ActionExecutor, ButtonStore, NotificationSink};
use webdeck_core::types::notification::Notification;
use webdeck_plugin::{ActionRegistry, PluginDescriptor, PluginLoader};
use webdeck_system::{FilteredNotifier, JsonDeckStore, SystemExecutor};

use crate::board::ButtonBoard;
use crate::builtins::register_builtins;
use crate::dispatch::Dispatcher;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Registers the built-in actions, then every plugin found in the
/// configured directory.
///
/// The returned registry is complete; callers freeze it behind an `Arc`.
pub fn build_registry(
    config: &AppConfig,
    executor: Arc<dyn ActionExecutor>,
) -> (ActionRegistry, Vec<PluginDescriptor>) {
    let mut registry = ActionRegistry::new();

    let builtins = register_builtins(&mut registry, executor);
    info!(count = builtins, "Built-in actions registered");

    let plugins = PluginLoader::new(config.plugins.clone()).load_directory(&mut registry);

    (registry, plugins)
}

/// Assembles the shared state from a finished registry and collaborators.
pub async fn build_state(
    config: AppConfig,
    registry: ActionRegistry,
    plugins: Vec<PluginDescriptor>,
    notifier: Arc<dyn NotificationSink>,
    store: Arc<dyn ButtonStore>,
    hostname: &str,
) -> AppState {
    let dispatcher = Dispatcher::new(
        Arc::new(registry),
        notifier,
        config.notifications.title.clone(),
    );
    let board = ButtonBoard::load(store).await;

    AppState {
        config: Arc::new(config),
        dispatcher: Arc::new(dispatcher),
        board: Arc::new(board),
        plugins: Arc::new(plugins),
        hostname: Arc::from(hostname),
    }
}

/// Runs the WebDeck server with the default desktop collaborators.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting WebDeck v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Button layout ────────────────────────────────────
    let store = JsonDeckStore::new(&config.deck.path);
    if config.deck.create_if_missing {
        store.ensure_default()?;
    }

    // ── Step 2: Collaborators ────────────────────────────────────
    let executor: Arc<dyn ActionExecutor> = Arc::new(SystemExecutor::new());
    let notifier: Arc<dyn NotificationSink> =
        Arc::new(FilteredNotifier::from_config(&config.notifications));

    // ── Step 3: Action registry ──────────────────────────────────
    let (registry, plugins) = build_registry(&config, executor);
    info!(
        actions = registry.len(),
        plugins = plugins.len(),
        "Action registry ready"
    );

    // ── Step 4: Host identity ────────────────────────────────────
    let hostname = webdeck_system::hostname();
    info!(hostname = %hostname, "Host identity resolved");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let title = config.notifications.title.clone();
    let state = build_state(config, registry, plugins, notifier, Arc::new(store), &hostname).await;

    // ── Step 5: Bind and serve ───────────────────────────────────
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("WebDeck server listening on {}", addr);
    state
        .dispatcher
        .notify(Notification::info(title, "Server started!"));

    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("WebDeck server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
