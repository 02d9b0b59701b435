//! JSON button layout store.
//!
//! The layout file holds three blocks: `notifications`, `password` and
//! `buttons`. Only `buttons` is read by the server; the other two are
//! written with the default layout and preserved for the configuration
//! editor.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use webdeck_core::error::{AppError, ErrorKind};
use webdeck_core::result::AppResult;
use webdeck_core::traits::ButtonStore;
use webdeck_core::types::button::ButtonDescriptor;

#[derive(Debug, Deserialize)]
struct LayoutFile {
    #[serde(default)]
    buttons: Vec<ButtonDescriptor>,
}

/// Reads buttons from a JSON layout file.
#[derive(Debug, Clone)]
pub struct JsonDeckStore {
    /// Layout file path.
    path: PathBuf,
}

impl JsonDeckStore {
    /// Creates a store for `path`. The file is not touched.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the layout file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the default layout if the file does not exist.
    ///
    /// Returns `true` when a file was created.
    pub fn ensure_default(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&default_layout())?;
        fs::write(&self.path, contents)?;

        info!(path = %self.path.display(), "Created default button layout");
        Ok(true)
    }
}

impl ButtonStore for JsonDeckStore {
    fn read_buttons(&self) -> AppResult<Vec<ButtonDescriptor>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Io,
                format!("Failed to read button layout '{}'", self.path.display()),
                e,
            )
        })?;
        let layout: LayoutFile = serde_json::from_str(&contents)?;
        Ok(layout.buttons)
    }
}

/// Returns the buttons written to a fresh layout file.
pub fn default_buttons() -> Vec<ButtonDescriptor> {
    vec![
        ButtonDescriptor::new("Example action", "🎬", "example"),
        ButtonDescriptor::new("Open Text Editor", "🎵", "open_app").with_path(default_editor()),
        ButtonDescriptor::new("Mute/Unmute Sound", "🎙️", "toggle_mute"),
        ButtonDescriptor::new("Play/Pause Media", "📹", "pause_media"),
        ButtonDescriptor::new("Next/Skip Track", "🔴", "skip_track"),
        ButtonDescriptor::new("Previous Track", "⏹️", "previous_track"),
        ButtonDescriptor::new("Open ChatGPT", "▶️", "open_url").with_path("https://chat.openai.com/"),
        ButtonDescriptor::new("Lock Screen", "⏸️", "lock_screen"),
    ]
}

/// Returns the complete default layout document.
pub fn default_layout() -> Value {
    json!({
        "notifications": {"enabled": true, "important_only": false},
        "password": {"required": false, "value": "your_password_here"},
        "buttons": default_buttons(),
    })
}

fn default_editor() -> &'static str {
    if cfg!(target_os = "windows") {
        "C:\\Windows\\System32\\notepad.exe"
    } else if cfg!(target_os = "macos") {
        "/System/Applications/TextEdit.app"
    } else {
        "gedit"
    }
}
