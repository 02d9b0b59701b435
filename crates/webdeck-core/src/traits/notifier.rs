//! Notification sink trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::notification::Notification;

/// Destination for user-facing notifications (desktop toasts, logs).
///
/// The dispatcher calls this fire-and-forget; an `Err` is logged and never
/// reaches the HTTP client.
#[async_trait]
pub trait NotificationSink: Send + Sync + std::fmt::Debug + 'static {
    /// Delivers a notification.
    async fn notify(&self, notification: Notification) -> AppResult<()>;
}
