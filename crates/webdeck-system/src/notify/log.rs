//! Notification sink that only writes log lines.

use async_trait::async_trait;
use tracing::{info, warn};

use webdeck_core::result::AppResult;
use webdeck_core::traits::NotificationSink;
use webdeck_core::types::notification::Notification;

/// Writes notifications to the log. Used on headless hosts.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    async fn notify(&self, notification: Notification) -> AppResult<()> {
        if notification.is_important() {
            warn!(title = %notification.title, message = %notification.message, "Notification");
        } else {
            info!(title = %notification.title, message = %notification.message, "Notification");
        }
        Ok(())
    }
}
