//! Collaborator traits defined in `webdeck-core` and implemented by other crates.

pub mod button_store;
pub mod executor;
pub mod notifier;

pub use button_store::ButtonStore;
pub use executor::ActionExecutor;
pub use notifier::NotificationSink;
