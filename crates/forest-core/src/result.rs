//! Convenience result type alias for the folder forest.

use crate::error::AppError;

/// A specialized `Result` type for forest operations.
pub type AppResult<T> = Result<T, AppError>;
