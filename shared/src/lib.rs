//! Shared types for the meal subscription engine
//!
//! Domain models, the unified error type and small utilities used by
//! the engine crate and its callers.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
