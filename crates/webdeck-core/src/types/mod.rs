//! Core type definitions used across the WebDeck workspace.

pub mod action;
pub mod button;
pub mod notification;

pub use action::{ActionResult, ActionStatus, MediaKey, Payload};
pub use button::ButtonDescriptor;
pub use notification::{Notification, Severity};
