//! Toggle Mute capability.

use std::sync::Arc;

use webdeck_plugin_sdk::prelude::*;

use crate::audio::{AudioSessions, PulseSessions};

/// Operation toggling the foreground application's mute state.
pub const MUTE_FOREGROUND_APP: &str = "MuteForegroundApp";

/// Processes never muted: terminals and the server itself.
const IGNORED_PROCESSES: &[&str] = &[
    "gnome-terminal-",
    "konsole",
    "xterm",
    "alacritty",
    "kitty",
    "bash",
    "webdeck-server",
];

/// Plugin toggling mute for the application in the foreground.
pub struct ToggleMutePlugin {
    /// Audio backend.
    audio: Arc<dyn AudioSessions>,
}

impl ToggleMutePlugin {
    /// Creates the plugin over a specific audio backend.
    pub fn with_backend(audio: Arc<dyn AudioSessions>) -> Self {
        Self { audio }
    }

    fn mute_foreground_app(&self) -> Result<Value, ActionError> {
        let Some(target) = self.audio.foreground_process()? else {
            return Ok(error("No foreground window detected."));
        };
        // Ignored processes are a silent no-op.
        if IGNORED_PROCESSES.contains(&target.name.as_str()) {
            return Ok(Value::Null);
        }

        let owned: Vec<_> = self
            .audio
            .sessions()?
            .into_iter()
            .filter(|session| session.belongs_to(&target))
            .collect();
        let Some(first) = owned.first() else {
            return Ok(error(format!("No audio session found for {}.", target.name)));
        };

        // All streams of the app follow the first one so they stay in sync.
        let mute = !first.muted;
        for session in &owned {
            self.audio.set_mute(session, mute)?;
        }

        let verb = if mute { "Muted" } else { "Unmuted" };
        Ok(success(format!("{verb} {}", target.name)))
    }
}

impl Default for ToggleMutePlugin {
    fn default() -> Self {
        Self::with_backend(Arc::new(PulseSessions))
    }
}

impl Capability for ToggleMutePlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            name: "Toggle Mute".to_string(),
            author: "Windswipe".to_string(),
            version: "1.0".to_string(),
            description: "Toggles mute for the foreground application.".to_string(),
        }
    }

    fn operations(&self) -> Vec<OperationSpec> {
        vec![OperationSpec::no_args(MUTE_FOREGROUND_APP)]
    }

    fn invoke(&self, operation: &str, _payload: Option<&Payload>) -> Result<Value, ActionError> {
        match operation {
            MUTE_FOREGROUND_APP => self.mute_foreground_app(),
            other => Err(ActionError::UnknownOperation(other.to_string())),
        }
    }
}
