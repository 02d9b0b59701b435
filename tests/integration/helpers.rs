//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use webdeck_api::builtins::register_builtins;
use webdeck_api::build_state;
use webdeck_core::config::AppConfig;
use webdeck_core::result::AppResult;
use webdeck_core::traits::{ActionExecutor, NotificationSink};
use webdeck_core::types::action::{ActionResult, MediaKey};
use webdeck_core::types::notification::Notification;
use webdeck_plugin::{ActionRegistry, Capability, register_capability};
use webdeck_system::JsonDeckStore;

/// Hostname reported by test servers.
pub const TEST_HOST: &str = "test-host";

/// Executor for a host without media control.
#[derive(Debug, Default)]
pub struct StubExecutor;

impl ActionExecutor for StubExecutor {
    fn open_application(&self, path: &str) -> ActionResult {
        ActionResult::success(format!("Opened application: {path}"))
    }

    fn open_url(&self, url: &str) -> ActionResult {
        ActionResult::success(format!("Opened URL: {url}"))
    }

    fn media(&self, _key: MediaKey) -> ActionResult {
        ActionResult::error("Media control not available.")
    }

    fn lock_session(&self) -> ActionResult {
        ActionResult::success("Locked screen.")
    }

    fn show_message(&self, title: &str, _message: &str) -> ActionResult {
        ActionResult::success(format!("Displayed message: {title}"))
    }
}

/// Notification sink that keeps everything it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Returns a copy of the notifications received so far.
    pub fn seen(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    /// Waits until at least `count` notifications arrived.
    pub async fn wait_for(&self, count: usize) -> Vec<Notification> {
        for _ in 0..100 {
            if self.seen.lock().unwrap().len() >= count {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.seen()
    }
}

#[async_trait]
impl NotificationSink for RecordingNotifier {
    async fn notify(&self, notification: Notification) -> AppResult<()> {
        self.seen.lock().unwrap().push(notification);
        Ok(())
    }
}

/// Pairs a unit name with a capability for [`TestApp::with_plugins`].
pub fn unit<C: Capability>(name: &'static str, capability: C) -> (&'static str, Arc<dyn Capability>) {
    let capability: Arc<dyn Capability> = Arc::new(capability);
    (name, capability)
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Notifications sent by the server
    pub notifier: Arc<RecordingNotifier>,
    /// Application config
    pub config: AppConfig,
    /// Layout file path
    pub layout_path: PathBuf,
    /// Keeps the layout directory alive
    _dir: TempDir,
}

impl TestApp {
    /// Create a new test application with only the built-in actions
    pub async fn new() -> Self {
        Self::with_plugins(Vec::new()).await
    }

    /// Create a test application with in-process plugin units, registered
    /// after the built-ins in the given order
    pub async fn with_plugins(units: Vec<(&'static str, Arc<dyn Capability>)>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let layout_path = dir.path().join("webdeckCfg.json");

        let mut config = AppConfig::default();
        config.deck.path = layout_path.to_string_lossy().into_owned();
        config.plugins.directory = dir.path().join("plugins").to_string_lossy().into_owned();

        let store = JsonDeckStore::new(&layout_path);
        store.ensure_default().unwrap();

        let mut registry = ActionRegistry::new();
        register_builtins(&mut registry, Arc::new(StubExecutor));

        let mut plugins = Vec::new();
        for (unit, capability) in units {
            plugins.push(register_capability(unit, capability, &mut registry).unwrap());
        }

        let notifier = Arc::new(RecordingNotifier::default());
        let state = build_state(
            config.clone(),
            registry,
            plugins,
            notifier.clone(),
            Arc::new(store),
            TEST_HOST,
        )
        .await;

        Self {
            router: webdeck_api::build_app(state),
            notifier,
            config,
            layout_path,
            _dir: dir,
        }
    }

    /// Send a JSON request
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body = body.map(|b| b.to_string()).unwrap_or_default();
        self.raw_request(method, path, &body).await
    }

    /// Send a request with a raw body
    pub async fn raw_request(&self, method: &str, path: &str, body: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Origin", "http://deck.local")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(req).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// POST an action
    pub async fn action(&self, body: Value) -> TestResponse {
        self.request("POST", "/", Some(body)).await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Returns a header as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
