//! Native desktop notifications via `notify-send` or `osascript`.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use webdeck_core::error::AppError;
use webdeck_core::result::AppResult;
use webdeck_core::traits::NotificationSink;
use webdeck_core::types::notification::{Notification, Severity};

/// Shows notifications as desktop toasts.
#[derive(Debug, Default, Clone)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    /// Creates a new desktop notifier.
    pub fn new() -> Self {
        Self
    }
}

fn build_command(notification: &Notification) -> Option<Command> {
    if cfg!(target_os = "linux") {
        let urgency = match notification.severity {
            Severity::Important => "critical",
            Severity::Info => "normal",
        };
        let mut command = Command::new("notify-send");
        command
            .arg("--urgency")
            .arg(urgency)
            .arg(&notification.title)
            .arg(&notification.message);
        Some(command)
    } else if cfg!(target_os = "macos") {
        let script = format!(
            "display notification \"{}\" with title \"{}\"",
            notification.message.replace('"', "\\\""),
            notification.title.replace('"', "\\\"")
        );
        let mut command = Command::new("osascript");
        command.arg("-e").arg(script);
        Some(command)
    } else {
        None
    }
}

#[async_trait]
impl NotificationSink for DesktopNotifier {
    async fn notify(&self, notification: Notification) -> AppResult<()> {
        let Some(mut command) = build_command(&notification) else {
            return Err(AppError::external(
                "Desktop notifications are not supported on this platform",
            ));
        };

        let status = command
            .status()
            .await
            .map_err(|e| AppError::external(format!("Failed to send desktop notification: {e}")))?;

        if !status.success() {
            return Err(AppError::external(format!(
                "Desktop notification command exited with {status}"
            )));
        }

        debug!(title = %notification.title, "Desktop notification sent");
        Ok(())
    }
}
