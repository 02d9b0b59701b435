//! # webdeck-system
//!
//! Default implementations of the collaborator traits declared in
//! `webdeck-core`. Each one talks to the desktop through ordinary
//! command-line tools, so the server runs end-to-end without extra
//! native dependencies.
//!
//! - [`SystemExecutor`]: launches applications and URLs, media keys, lock
//! - [`DesktopNotifier`] / [`LogNotifier`]: notification sinks
//! - [`FilteredNotifier`]: applies the notification settings
//! - [`JsonDeckStore`]: reads the persisted button layout

pub mod deck;
pub mod executor;
pub mod host;
pub mod notify;

pub use deck::JsonDeckStore;
pub use executor::SystemExecutor;
pub use host::hostname;
pub use notify::{DesktopNotifier, FilteredNotifier, LogNotifier};
