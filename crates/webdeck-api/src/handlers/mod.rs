//! Route handlers.

pub mod action;
pub mod buttons;
pub mod discovery;
pub mod fallback;
pub mod plugins;
