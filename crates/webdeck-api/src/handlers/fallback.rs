//! Unmatched routes.

use webdeck_core::error::AppError;

use crate::error::ApiError;

/// Answers any unknown path with 404.
pub async fn not_found() -> ApiError {
    ApiError(AppError::not_found("Not found."))
}
