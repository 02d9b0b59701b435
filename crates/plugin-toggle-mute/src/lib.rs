//! Toggle Mute plugin for WebDeck.
//!
//! Exposes one action, `mute_foreground_app`, which flips the mute state
//! of every audio stream owned by the application in the foreground.

pub mod audio;
pub mod plugin;

pub use plugin::ToggleMutePlugin;

webdeck_plugin::export_capability!(ToggleMutePlugin);
