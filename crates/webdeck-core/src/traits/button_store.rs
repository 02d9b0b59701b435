//! Button layout store trait.

use crate::result::AppResult;
use crate::types::button::ButtonDescriptor;

/// Source of the persisted button layout.
pub trait ButtonStore: Send + Sync + std::fmt::Debug + 'static {
    /// Reads the current button layout.
    fn read_buttons(&self) -> AppResult<Vec<ButtonDescriptor>>;
}
