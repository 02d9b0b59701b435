//! Integration tests for discovery, layout and CORS handling.

mod helpers;

use std::fs;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use webdeck_api::build_registry;
use webdeck_core::config::AppConfig;
use webdeck_core::types::notification::Severity;

#[tokio::test]
async fn test_discover() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/discover", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "status": "online",
            "message": "WebDeck server is online",
            "hostname": helpers::TEST_HOST,
            "port": 8000
        })
    );

    let seen = app.notifier.wait_for(1).await;
    assert_eq!(seen[0].severity, Severity::Info);
    assert_eq!(seen[0].message, "Client connected!");
}

#[tokio::test]
async fn test_status_is_silent() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/status", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "online");
    assert_eq!(response.body["hostname"], helpers::TEST_HOST);

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(app.notifier.seen().is_empty());
}

#[tokio::test]
async fn test_default_buttons() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/buttons", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let buttons = response.body.as_array().unwrap();
    assert_eq!(buttons.len(), 8);
    assert_eq!(buttons[0]["action"], "example");
    assert_eq!(buttons[6]["path"], "https://chat.openai.com/");
}

#[tokio::test]
async fn test_reload_picks_up_edits() {
    let app = helpers::TestApp::new().await;

    fs::write(
        &app.layout_path,
        json!({
            "buttons": [{"label": "Lock", "icon": "🔒", "action": "lock_screen"}]
        })
        .to_string(),
    )
    .unwrap();

    let reload = app.request("POST", "/reload", None).await;
    assert_eq!(reload.status, StatusCode::OK);
    assert_eq!(
        reload.body,
        json!({"status": "success", "message": "Reloaded 1 buttons."})
    );

    let buttons = app.request("GET", "/buttons", None).await;
    assert_eq!(buttons.body[0]["label"], "Lock");
}

#[tokio::test]
async fn test_reload_failure_keeps_previous_layout() {
    let app = helpers::TestApp::new().await;
    fs::remove_file(&app.layout_path).unwrap();

    let reload = app.request("POST", "/reload", None).await;
    assert_eq!(reload.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reload.body["status"], "error");

    let buttons = app.request("GET", "/buttons", None).await;
    assert_eq!(buttons.body.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_options_on_any_path() {
    let app = helpers::TestApp::new().await;

    for path in ["/", "/anything/else"] {
        let response = app.raw_request("OPTIONS", path, "").await;

        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert_eq!(response.header("access-control-allow-origin"), Some("*"));
        assert_eq!(
            response.header("access-control-allow-methods"),
            Some("GET,POST,OPTIONS")
        );
        assert_eq!(
            response.header("access-control-allow-headers"),
            Some("content-type")
        );
    }
}

#[tokio::test]
async fn test_preflight() {
    let app = helpers::TestApp::new().await;

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/")
        .header("Origin", "http://deck.local")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn test_unknown_path() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/missing", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        json!({"status": "error", "message": "Not found."})
    );
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn test_no_plugins_loaded() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/plugins", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[test]
fn test_broken_library_does_not_stop_startup() {
    let dir = tempfile::tempdir().unwrap();
    let library = dir
        .path()
        .join(format!("broken.{}", std::env::consts::DLL_EXTENSION));
    fs::write(&library, b"not a shared library").unwrap();

    let mut config = AppConfig::default();
    config.plugins.directory = dir.path().to_string_lossy().into_owned();

    let (registry, plugins) = build_registry(&config, Arc::new(helpers::StubExecutor));

    assert!(plugins.is_empty());
    assert_eq!(registry.len(), 8);
    assert!(registry.resolve("lock_screen").is_some());
}
