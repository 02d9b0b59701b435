//! Process-spawning implementation of the built-in desktop actions.

use std::io;
use std::process::{Command, Stdio};

use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use webdeck_core::traits::ActionExecutor;
use webdeck_core::types::action::{ActionResult, MediaKey};

/// A program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Invocation {
    program: &'static str,
    args: Vec<String>,
}

impl Invocation {
    fn new(program: &'static str, args: &[&str]) -> Self {
        Self {
            program,
            args: args.iter().map(|arg| (*arg).to_string()).collect(),
        }
    }

    fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    fn command(&self) -> Command {
        let mut command = Command::new(self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }

    /// Starts the program without waiting for it.
    ///
    /// The child is awaited on the runtime so it is reaped when it exits.
    fn spawn(&self) -> io::Result<()> {
        let runtime = Handle::try_current()
            .map_err(|e| io::Error::other(format!("no async runtime to launch {}: {e}", self.program)))?;
        let _entered = runtime.enter();

        let mut child = tokio::process::Command::from(self.command()).spawn()?;
        let program = self.program;
        runtime.spawn(async move {
            match child.wait().await {
                Ok(status) => debug!(program, %status, "Launched program exited"),
                Err(e) => warn!(program, error = %e, "Failed to wait for launched program"),
            }
        });
        Ok(())
    }

    /// Runs the program to completion.
    fn run(&self) -> io::Result<()> {
        let status = self.command().status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("{} exited with {status}", self.program)))
        }
    }
}

/// Executes desktop actions by launching the platform's standard tools
/// (`xdg-open`, `playerctl`, `pactl`, `loginctl` on Linux; `open` and
/// `osascript` on macOS; `cmd` and `rundll32` on Windows).
#[derive(Debug, Default, Clone)]
pub struct SystemExecutor;

impl SystemExecutor {
    /// Creates a new executor.
    pub fn new() -> Self {
        Self
    }
}

fn opener(target: &str) -> Invocation {
    if cfg!(target_os = "windows") {
        Invocation::new("cmd", &["/C", "start", ""]).arg(target)
    } else if cfg!(target_os = "macos") {
        Invocation::new("open", &[]).arg(target)
    } else {
        Invocation::new("xdg-open", &[]).arg(target)
    }
}

/// Returns the command sending `key`, or `None` when the platform has no
/// media control tool.
fn media_invocation(key: MediaKey) -> Option<Invocation> {
    if cfg!(target_os = "linux") {
        Some(match key {
            MediaKey::PlayPause => Invocation::new("playerctl", &["play-pause"]),
            MediaKey::NextTrack => Invocation::new("playerctl", &["next"]),
            MediaKey::PreviousTrack => Invocation::new("playerctl", &["previous"]),
            MediaKey::ToggleMute => {
                Invocation::new("pactl", &["set-sink-mute", "@DEFAULT_SINK@", "toggle"])
            }
        })
    } else if cfg!(target_os = "macos") {
        match key {
            MediaKey::ToggleMute => Some(Invocation::new(
                "osascript",
                &[
                    "-e",
                    "set volume output muted not (output muted of (get volume settings))",
                ],
            )),
            MediaKey::PlayPause => Some(Invocation::new(
                "osascript",
                &["-e", "tell application \"Music\" to playpause"],
            )),
            MediaKey::NextTrack => Some(Invocation::new(
                "osascript",
                &["-e", "tell application \"Music\" to next track"],
            )),
            MediaKey::PreviousTrack => Some(Invocation::new(
                "osascript",
                &["-e", "tell application \"Music\" to previous track"],
            )),
        }
    } else {
        None
    }
}

fn lock_invocation() -> Invocation {
    if cfg!(target_os = "windows") {
        Invocation::new("rundll32.exe", &["user32.dll,LockWorkStation"])
    } else if cfg!(target_os = "macos") {
        Invocation::new("pmset", &["displaysleepnow"])
    } else {
        Invocation::new("loginctl", &["lock-session"])
    }
}

fn message_invocation(title: &str, message: &str) -> Invocation {
    if cfg!(target_os = "windows") {
        Invocation::new("msg", &["*"]).arg(&format!("{title}: {message}"))
    } else if cfg!(target_os = "macos") {
        let script = format!(
            "display dialog \"{}\" with title \"{}\" buttons {{\"OK\"}}",
            message.replace('"', "\\\""),
            title.replace('"', "\\\"")
        );
        Invocation::new("osascript", &["-e"]).arg(&script)
    } else {
        Invocation::new("zenity", &["--info"])
            .arg(&format!("--title={title}"))
            .arg(&format!("--text={message}"))
    }
}

impl ActionExecutor for SystemExecutor {
    fn open_application(&self, path: &str) -> ActionResult {
        match opener(path).spawn() {
            Ok(()) => {
                info!(path = %path, "Opened application");
                ActionResult::success(format!("Opened application: {path}"))
            }
            Err(e) => {
                warn!(path = %path, error = %e, "Failed to open application");
                ActionResult::error(format!("Failed to open application: {e}"))
            }
        }
    }

    fn open_url(&self, url: &str) -> ActionResult {
        match opener(url).spawn() {
            Ok(()) => {
                info!(url = %url, "Opened URL");
                ActionResult::success(format!("Opened URL: {url}"))
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to open URL");
                ActionResult::error(format!("Failed to open URL: {e}"))
            }
        }
    }

    fn media(&self, key: MediaKey) -> ActionResult {
        let Some(invocation) = media_invocation(key) else {
            return ActionResult::error("Media control not available.");
        };

        match invocation.run() {
            Ok(()) => {
                debug!(key = ?key, "Media key sent");
                ActionResult::success(key.success_message())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(program = invocation.program, "Media control tool not installed");
                ActionResult::error("Media control not available.")
            }
            Err(e) => ActionResult::error(format!("Failed to execute media control: {e}")),
        }
    }

    fn lock_session(&self) -> ActionResult {
        match lock_invocation().run() {
            Ok(()) => ActionResult::success("Locked screen."),
            Err(e) => ActionResult::error(format!("Failed to lock screen: {e}")),
        }
    }

    fn show_message(&self, title: &str, message: &str) -> ActionResult {
        match message_invocation(title, message).spawn() {
            Ok(()) => ActionResult::success(format!("Displayed message: {title}")),
            Err(e) => ActionResult::error(format!("Failed to display message: {e}")),
        }
    }
}
