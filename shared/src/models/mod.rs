//! Data models
//!
//! Shared between the subscription engine and its callers. Field names
//! serialize in camelCase to match the stored documents.

pub mod add_on;
pub mod draft;
pub mod meal;
pub mod offer;
pub mod plan;
pub mod subscription;
pub mod wallet;
pub mod week_type;

// Re-exports
pub use add_on::*;
pub use draft::*;
pub use meal::*;
pub use offer::*;
pub use plan::*;
pub use subscription::*;
pub use wallet::*;
pub use week_type::*;
