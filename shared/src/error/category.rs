//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Catalog errors
/// - 2xxx: Offer errors
/// - 3xxx: Subscription errors
/// - 4xxx: Wallet errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Catalog errors (1xxx)
    Catalog,
    /// Offer errors (2xxx)
    Offer,
    /// Subscription errors (3xxx)
    Subscription,
    /// Wallet errors (4xxx)
    Wallet,
    /// System errors (9xxx and anything unassigned)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Catalog,
            2000..3000 => Self::Offer,
            3000..4000 => Self::Subscription,
            4000..5000 => Self::Wallet,
            _ => Self::System,
        }
    }

    /// Whether errors in this category are caused by user input and can be
    /// corrected by the user (as opposed to system faults)
    pub fn is_user_correctable(&self) -> bool {
        !matches!(self, Self::System)
    }
}

impl ErrorCode {
    /// Get the category of this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
