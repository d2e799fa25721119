//! Convenience result type alias for GeoDash.

use crate::error::AppError;

/// A specialized `Result` type for GeoDash operations.
pub type AppResult<T> = Result<T, AppError>;
