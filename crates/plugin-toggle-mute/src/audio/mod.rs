//! Access to per-application audio streams.

pub mod pulse;

#[cfg(test)]
pub mod mock;

use webdeck_plugin_sdk::prelude::ActionError;

pub use pulse::PulseSessions;

/// A process owning the focused window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    /// Process id.
    pub pid: u32,
    /// Executable name.
    pub name: String,
}

/// One playback stream belonging to an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSession {
    /// Backend-specific stream index.
    pub index: u32,
    /// Owning process id, when reported.
    pub pid: Option<u32>,
    /// Owning executable name, when reported.
    pub binary: Option<String>,
    /// Current mute state.
    pub muted: bool,
}

impl AudioSession {
    /// Returns whether the stream belongs to `process`.
    pub fn belongs_to(&self, process: &ProcessInfo) -> bool {
        self.pid == Some(process.pid) || self.binary.as_deref() == Some(process.name.as_str())
    }
}

/// Desktop audio backend.
pub trait AudioSessions: Send + Sync + 'static {
    /// Returns the process owning the focused window, if any.
    fn foreground_process(&self) -> Result<Option<ProcessInfo>, ActionError>;

    /// Lists current playback streams.
    fn sessions(&self) -> Result<Vec<AudioSession>, ActionError>;

    /// Sets the mute state of one stream.
    fn set_mute(&self, session: &AudioSession, muted: bool) -> Result<(), ActionError>;
}
