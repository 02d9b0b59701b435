//! Convenience result type alias for WebDeck.

use crate::error::AppError;

/// A specialized `Result` type for WebDeck operations.
pub type AppResult<T> = Result<T, AppError>;
