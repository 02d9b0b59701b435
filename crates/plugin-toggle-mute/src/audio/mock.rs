//! In-memory audio backend for tests.

use std::sync::Mutex;

use webdeck_plugin_sdk::prelude::ActionError;

use super::{AudioSession, AudioSessions, ProcessInfo};

#[derive(Debug, Default)]
pub struct MockSessions {
    pub foreground: Option<ProcessInfo>,
    pub streams: Mutex<Vec<AudioSession>>,
}

impl MockSessions {
    pub fn new(foreground: Option<ProcessInfo>, streams: Vec<AudioSession>) -> Self {
        Self {
            foreground,
            streams: Mutex::new(streams),
        }
    }
}

impl AudioSessions for MockSessions {
    fn foreground_process(&self) -> Result<Option<ProcessInfo>, ActionError> {
        Ok(self.foreground.clone())
    }

    fn sessions(&self) -> Result<Vec<AudioSession>, ActionError> {
        Ok(self.streams.lock().unwrap().clone())
    }

    fn set_mute(&self, session: &AudioSession, muted: bool) -> Result<(), ActionError> {
        let mut streams = self.streams.lock().unwrap();
        if let Some(stream) = streams.iter_mut().find(|s| s.index == session.index) {
            stream.muted = muted;
        }
        Ok(())
    }
}
