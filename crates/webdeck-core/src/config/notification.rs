//! Desktop notification configuration.

use serde::{Deserialize, Serialize};

/// Which notification sink the server uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationBackend {
    /// Native desktop notifications.
    Desktop,
    /// Log lines only.
    Log,
}

/// Notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Master switch.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Only deliver important notifications (failures, bad requests).
    #[serde(default)]
    pub important_only: bool,
    /// Title used for every notification.
    #[serde(default = "default_title")]
    pub title: String,
    /// Delivery backend.
    #[serde(default = "default_backend")]
    pub backend: NotificationBackend,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            important_only: false,
            title: default_title(),
            backend: default_backend(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "WebDeck".to_string()
}

fn default_backend() -> NotificationBackend {
    NotificationBackend::Desktop
}
