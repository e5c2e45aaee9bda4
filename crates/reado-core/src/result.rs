//! Convenience result type alias for Reado.

use crate::error::AppError;

/// A specialized `Result` type for Reado operations.
pub type AppResult<T> = Result<T, AppError>;
