//! OS action executor trait.

use crate::types::action::{ActionResult, MediaKey};

/// Performs the concrete desktop actions behind the built-in handlers.
///
/// Every operation is synchronous and reports its outcome as an
/// [`ActionResult`]; the dispatcher runs it on a blocking worker.
pub trait ActionExecutor: Send + Sync + std::fmt::Debug + 'static {
    /// Launches an application or opens a file with its default handler.
    fn open_application(&self, path: &str) -> ActionResult;

    /// Opens a URL in the default browser.
    fn open_url(&self, url: &str) -> ActionResult;

    /// Sends a media transport key.
    ///
    /// Implementations without media control report
    /// `"Media control not available."`.
    fn media(&self, key: MediaKey) -> ActionResult;

    /// Locks the current desktop session.
    fn lock_session(&self) -> ActionResult;

    /// Shows a modal message on the desktop.
    fn show_message(&self, title: &str, message: &str) -> ActionResult;
}
