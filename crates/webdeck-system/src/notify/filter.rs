//! Applies the user's notification settings in front of a sink.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use webdeck_core::config::{NotificationBackend, NotificationConfig};
use webdeck_core::result::AppResult;
use webdeck_core::traits::NotificationSink;
use webdeck_core::types::notification::Notification;

use super::{DesktopNotifier, LogNotifier};

/// Drops notifications the settings exclude and forwards the rest.
#[derive(Debug, Clone)]
pub struct FilteredNotifier {
    /// Wrapped sink.
    inner: Arc<dyn NotificationSink>,
    /// Master switch.
    enabled: bool,
    /// Forward only important notifications.
    important_only: bool,
}

impl FilteredNotifier {
    /// Wraps `inner` with the given settings.
    pub fn new(inner: Arc<dyn NotificationSink>, config: &NotificationConfig) -> Self {
        Self {
            inner,
            enabled: config.enabled,
            important_only: config.important_only,
        }
    }

    /// Builds the configured backend and wraps it.
    pub fn from_config(config: &NotificationConfig) -> Self {
        let inner: Arc<dyn NotificationSink> = match config.backend {
            NotificationBackend::Desktop => Arc::new(DesktopNotifier::new()),
            NotificationBackend::Log => Arc::new(LogNotifier),
        };
        Self::new(inner, config)
    }

    /// Returns whether `notification` passes the settings.
    pub fn allows(&self, notification: &Notification) -> bool {
        self.enabled && (!self.important_only || notification.is_important())
    }
}

#[async_trait]
impl NotificationSink for FilteredNotifier {
    async fn notify(&self, notification: Notification) -> AppResult<()> {
        if !self.allows(&notification) {
            debug!(message = %notification.message, "Notification suppressed by settings");
            return Ok(());
        }
        self.inner.notify(notification).await
    }
}
