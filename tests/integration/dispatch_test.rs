//! Integration tests for action dispatch.

mod helpers;

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use serde_json::{Value, json};

use plugin_toggle_mute::ToggleMutePlugin;
use plugin_toggle_mute::audio::{AudioSession, AudioSessions, ProcessInfo};
use webdeck_core::error::ActionError;
use webdeck_core::types::action::Payload;
use webdeck_core::types::notification::Severity;
use webdeck_plugin::{Capability, OperationSpec, PluginMetadata};

/// Plugin answering with its own name.
struct Named(&'static str);

impl Capability for Named {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            name: self.0.to_string(),
            ..PluginMetadata::default()
        }
    }

    fn operations(&self) -> Vec<OperationSpec> {
        vec![
            OperationSpec::no_args("ExampleAction"),
            OperationSpec::no_args("ToggleMute"),
            OperationSpec::no_args("Explode"),
            OperationSpec::with_payload("EchoPath"),
            OperationSpec::no_args("_secret"),
        ]
    }

    fn invoke(&self, operation: &str, payload: Option<&Payload>) -> Result<Value, ActionError> {
        match operation {
            "ExampleAction" | "ToggleMute" => Ok(json!({"status": "success", "message": self.0})),
            "Explode" => panic!("plugin crashed"),
            "EchoPath" => payload
                .and_then(|p| p.get("path"))
                .cloned()
                .ok_or_else(|| ActionError::invalid_payload("path")),
            other => Err(ActionError::UnknownOperation(other.to_string())),
        }
    }
}

/// Audio backend with a single unmuted browser stream in the foreground.
#[derive(Default)]
struct OneStream {
    muted: Mutex<bool>,
}

impl AudioSessions for OneStream {
    fn foreground_process(&self) -> Result<Option<ProcessInfo>, ActionError> {
        Ok(Some(ProcessInfo {
            pid: 42,
            name: "firefox".to_string(),
        }))
    }

    fn sessions(&self) -> Result<Vec<AudioSession>, ActionError> {
        Ok(vec![AudioSession {
            index: 1,
            pid: Some(42),
            binary: Some("firefox".to_string()),
            muted: *self.muted.lock().unwrap(),
        }])
    }

    fn set_mute(&self, _session: &AudioSession, muted: bool) -> Result<(), ActionError> {
        *self.muted.lock().unwrap() = muted;
        Ok(())
    }
}

#[tokio::test]
async fn test_unknown_action() {
    let app = helpers::TestApp::new().await;

    let response = app.action(json!({"action": "does_not_exist"})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({"status": "error", "message": "Unknown action."})
    );
}

#[tokio::test]
async fn test_missing_or_non_string_action() {
    let app = helpers::TestApp::new().await;

    let missing = app.action(json!({"path": "/tmp"})).await;
    assert_eq!(missing.body["message"], "Unknown action.");

    let numeric = app.action(json!({"action": 12})).await;
    assert_eq!(numeric.status, StatusCode::BAD_REQUEST);
    assert_eq!(numeric.body["message"], "Unknown action.");

    let empty = app.raw_request("POST", "/", "").await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.body["message"], "Unknown action.");
}

#[tokio::test]
async fn test_malformed_body() {
    let app = helpers::TestApp::new().await;

    let response = app.raw_request("POST", "/", "{\"action\": ").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({"status": "error", "message": "Invalid JSON."})
    );

    let array = app.raw_request("POST", "/", "[\"example\"]").await;
    assert_eq!(array.status, StatusCode::BAD_REQUEST);
    assert_eq!(array.body["message"], "Invalid JSON.");
}

#[tokio::test]
async fn test_toggle_mute_without_media_control() {
    let app = helpers::TestApp::new().await;

    let response = app.action(json!({"action": "toggle_mute"})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({"status": "error", "message": "Media control not available."})
    );
}

#[tokio::test]
async fn test_request_identifier_is_normalized() {
    let app = helpers::TestApp::new().await;

    let response = app.action(json!({"action": "LockScreen"})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Locked screen.");
}

#[tokio::test]
async fn test_open_app_payload() {
    let app = helpers::TestApp::new().await;

    let ok = app
        .action(json!({"action": "open_app", "path": "/usr/bin/gedit"}))
        .await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(
        ok.body,
        json!({"status": "success", "message": "Opened application: /usr/bin/gedit"})
    );

    let missing = app.action(json!({"action": "open_app"})).await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        missing.body["message"],
        "Failed to execute open_app: Missing or invalid 'path' in request."
    );
}

#[tokio::test]
async fn test_example_action() {
    let app = helpers::TestApp::new().await;

    let response = app.action(json!({"action": "example"})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Opened example message box.");
}

#[tokio::test]
async fn test_first_unit_wins_collision() {
    let app = helpers::TestApp::with_plugins(vec![
        helpers::unit("alpha", Named("alpha")),
        helpers::unit("beta", Named("beta")),
    ])
    .await;

    let response = app.action(json!({"action": "example_action"})).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "alpha");

    let plugins = app.request("GET", "/plugins", None).await;
    assert_eq!(plugins.body[0]["unit"], "alpha");
    assert_eq!(plugins.body[1]["unit"], "beta");
    assert_eq!(plugins.body[1]["actions"], json!([]));
    assert!(
        plugins.body[1]["rejected"]
            .as_array()
            .unwrap()
            .contains(&json!("example_action"))
    );
}

#[tokio::test]
async fn test_builtin_precedence_over_plugin() {
    let app = helpers::TestApp::with_plugins(vec![helpers::unit("alpha", Named("alpha"))]).await;

    let response = app.action(json!({"action": "toggle_mute"})).await;

    assert_eq!(response.body["message"], "Media control not available.");

    let plugins = app.request("GET", "/plugins", None).await;
    assert!(
        plugins.body[0]["rejected"]
            .as_array()
            .unwrap()
            .contains(&json!("toggle_mute"))
    );
}

#[tokio::test]
async fn test_private_operations_are_not_actions() {
    let app = helpers::TestApp::with_plugins(vec![helpers::unit("alpha", Named("alpha"))]).await;

    let response = app.action(json!({"action": "_secret"})).await;
    assert_eq!(response.body["message"], "Unknown action.");
}

#[tokio::test]
async fn test_plugin_payload_operation() {
    let app = helpers::TestApp::with_plugins(vec![helpers::unit("alpha", Named("alpha"))]).await;

    let response = app
        .action(json!({"action": "echo_path", "path": "/home/deck"}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"status": "success", "message": "echo_path executed."})
    );
}

#[tokio::test]
async fn test_panicking_handler_does_not_stop_server() {
    let app = helpers::TestApp::with_plugins(vec![helpers::unit("alpha", Named("alpha"))]).await;

    let crashed = app.action(json!({"action": "explode"})).await;
    assert_eq!(crashed.status, StatusCode::BAD_REQUEST);
    assert_eq!(crashed.body["status"], "error");

    let next = app.action(json!({"action": "example"})).await;
    assert_eq!(next.status, StatusCode::OK);
}

#[tokio::test]
async fn test_toggle_mute_plugin() {
    let audio = Arc::new(OneStream::default());
    let plugin = ToggleMutePlugin::with_backend(audio.clone());
    let app = helpers::TestApp::with_plugins(vec![helpers::unit("toggle_mute", plugin)]).await;

    let muted = app.action(json!({"action": "mute_foreground_app"})).await;
    assert_eq!(muted.status, StatusCode::OK);
    assert_eq!(muted.body["message"], "Muted firefox");
    assert!(*audio.muted.lock().unwrap());

    let unmuted = app.action(json!({"action": "MuteForegroundApp"})).await;
    assert_eq!(unmuted.body["message"], "Unmuted firefox");

    let plugins = app.request("GET", "/plugins", None).await;
    assert_eq!(plugins.body[0]["metadata"]["name"], "Toggle Mute");
    assert_eq!(plugins.body[0]["actions"], json!(["mute_foreground_app"]));
}

/// Audio backend with a terminal in the foreground.
struct TerminalInFront;

impl AudioSessions for TerminalInFront {
    fn foreground_process(&self) -> Result<Option<ProcessInfo>, ActionError> {
        Ok(Some(ProcessInfo {
            pid: 7,
            name: "kitty".to_string(),
        }))
    }

    fn sessions(&self) -> Result<Vec<AudioSession>, ActionError> {
        Ok(Vec::new())
    }

    fn set_mute(&self, _session: &AudioSession, _muted: bool) -> Result<(), ActionError> {
        panic!("ignored process must not be muted")
    }
}

#[tokio::test]
async fn test_toggle_mute_plugin_ignores_terminal() {
    let plugin = ToggleMutePlugin::with_backend(Arc::new(TerminalInFront));
    let app = helpers::TestApp::with_plugins(vec![helpers::unit("toggle_mute", plugin)]).await;

    let response = app.action(json!({"action": "mute_foreground_app"})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"status": "success", "message": "mute_foreground_app executed."})
    );
}

#[tokio::test]
async fn test_notifications_follow_results() {
    let app = helpers::TestApp::new().await;

    app.action(json!({"action": "lock_screen"})).await;
    let seen = app.notifier.wait_for(1).await;
    assert_eq!(seen[0].severity, Severity::Info);
    assert_eq!(seen[0].message, "Locked screen.");
    assert_eq!(seen[0].title, "WebDeck");

    app.action(json!({"action": "nope"})).await;
    let seen = app.notifier.wait_for(2).await;
    assert_eq!(seen[1].severity, Severity::Important);
    assert_eq!(seen[1].message, "Received unknown action.");
}

#[tokio::test]
async fn test_action_response_allows_any_origin() {
    let app = helpers::TestApp::new().await;

    let response = app.action(json!({"action": "example"})).await;

    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}
