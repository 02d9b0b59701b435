//! PulseAudio / PipeWire backend driven through `pactl` and `xdotool`.

use std::fs;
use std::process::Command;

use webdeck_plugin_sdk::prelude::ActionError;

use super::{AudioSession, AudioSessions, ProcessInfo};

/// Backend using the desktop's command-line tools.
#[derive(Debug, Default)]
pub struct PulseSessions;

impl AudioSessions for PulseSessions {
    fn foreground_process(&self) -> Result<Option<ProcessInfo>, ActionError> {
        let output = run("xdotool", &["getactivewindow", "getwindowpid"])?;
        let Ok(pid) = output.trim().parse::<u32>() else {
            return Ok(None);
        };
        let name = fs::read_to_string(format!("/proc/{pid}/comm"))
            .map(|comm| comm.trim().to_string())
            .map_err(|e| {
                ActionError::failed(format!("Could not get foreground process name. {e}"))
            })?;
        Ok(Some(ProcessInfo { pid, name }))
    }

    fn sessions(&self) -> Result<Vec<AudioSession>, ActionError> {
        run("pactl", &["list", "sink-inputs"]).map(|text| parse_sink_inputs(&text))
    }

    fn set_mute(&self, session: &AudioSession, muted: bool) -> Result<(), ActionError> {
        let index = session.index.to_string();
        let state = if muted { "1" } else { "0" };
        run("pactl", &["set-sink-input-mute", &index, state]).map(|_| ())
    }
}

fn run(program: &str, args: &[&str]) -> Result<String, ActionError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| ActionError::failed(format!("{program} is not available: {e}")))?;
    if !output.status.success() {
        return Err(ActionError::failed(format!(
            "{program} failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parses the output of `pactl list sink-inputs`.
pub fn parse_sink_inputs(text: &str) -> Vec<AudioSession> {
    let mut sessions = Vec::new();
    let mut current: Option<AudioSession> = None;

    for line in text.lines() {
        let line = line.trim();
        if let Some(index) = line.strip_prefix("Sink Input #") {
            sessions.extend(current.take());
            current = index.trim().parse().ok().map(|index| AudioSession {
                index,
                pid: None,
                binary: None,
                muted: false,
            });
            continue;
        }

        let Some(session) = current.as_mut() else {
            continue;
        };

        if let Some(mute) = line.strip_prefix("Mute:") {
            session.muted = mute.trim() == "yes";
        } else if let Some(pid) = property(line, "application.process.id") {
            session.pid = pid.parse().ok();
        } else if let Some(binary) = property(line, "application.process.binary") {
            session.binary = Some(binary.to_string());
        }
    }

    sessions.extend(current);
    sessions
}

fn property<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(key)?.trim_start().strip_prefix('=')?;
    Some(rest.trim().trim_matches('"'))
}
