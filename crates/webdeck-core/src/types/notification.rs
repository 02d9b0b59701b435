//! Desktop notification messages.

use serde::{Deserialize, Serialize};

/// How loudly a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Routine feedback (client connected, action succeeded).
    Info,
    /// Something the user should look at (action failed, bad request).
    Important,
}

/// A notification handed to a [`NotificationSink`](crate::traits::NotificationSink).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Title line.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Severity.
    pub severity: Severity,
}

impl Notification {
    /// Creates a new notification.
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    /// Creates an [`Severity::Info`] notification.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Info)
    }

    /// Creates an [`Severity::Important`] notification.
    pub fn important(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Important)
    }

    /// Returns whether this notification is important.
    pub fn is_important(&self) -> bool {
        self.severity == Severity::Important
    }
}
