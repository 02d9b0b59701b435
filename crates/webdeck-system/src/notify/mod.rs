//! Notification sinks.

pub mod desktop;
pub mod filter;
pub mod log;

pub use desktop::DesktopNotifier;
pub use filter::FilteredNotifier;
pub use log::LogNotifier;
