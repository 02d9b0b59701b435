//! Button layout descriptors served to deck clients.

use serde::{Deserialize, Serialize};

/// A single deck button as persisted in the layout file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonDescriptor {
    /// Caption shown under the button.
    pub label: String,
    /// Icon (usually a single emoji).
    #[serde(default)]
    pub icon: String,
    /// Action identifier sent back when the button is pressed.
    pub action: String,
    /// Target path or URL for `open_app` / `open_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ButtonDescriptor {
    /// Creates a descriptor without a path.
    pub fn new(label: &str, icon: &str, action: &str) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            action: action.to_string(),
            path: None,
        }
    }

    /// Sets the target path.
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }
}
