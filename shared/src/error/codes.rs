//! Unified error codes for the subscription workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Catalog errors (meals, plans, add-ons)
//! - 2xxx: Offer / promo code errors
//! - 3xxx: Subscription errors
//! - 4xxx: Wallet errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Catalog ====================
    /// Add-on not found
    AddOnNotFound = 1003,
    /// A plan must be selected outside trial mode
    PlanRequired = 1004,

    // ==================== 2xxx: Offer ====================
    /// Promo code does not match any active offer
    PromoCodeInvalid = 2001,
    /// Promo code exists but is outside its validity window
    PromoCodeExpired = 2002,
    /// Promo code is empty
    PromoCodeRequired = 2003,

    // ==================== 3xxx: Subscription ====================
    /// Subscription not found
    SubscriptionNotFound = 3001,
    /// Plan duration must be at least one delivery day
    InvalidDuration = 3002,
    /// Date lies outside the subscription window
    DateOutsideWindow = 3003,

    // ==================== 4xxx: Wallet ====================
    /// Wallet balance is lower than the requested debit
    InsufficientBalance = 4001,
    /// Transaction amount must be positive and finite
    InvalidAmount = 4002,
    /// Wallet operations require a user id
    WalletUserRequired = 4003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Storage error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            // Catalog
            ErrorCode::AddOnNotFound => "Add-on not found",
            ErrorCode::PlanRequired => "Please select a plan",

            // Offer
            ErrorCode::PromoCodeInvalid => "Please enter a valid promo code",
            ErrorCode::PromoCodeExpired => "This promo code is not currently valid",
            ErrorCode::PromoCodeRequired => "Please enter a promo code",

            // Subscription
            ErrorCode::SubscriptionNotFound => "Subscription not found",
            ErrorCode::InvalidDuration => "Plan duration must be at least one day",
            ErrorCode::DateOutsideWindow => "Date is outside the subscription period",

            // Wallet
            ErrorCode::InsufficientBalance => "Insufficient wallet balance",
            ErrorCode::InvalidAmount => "Transaction amount must be greater than 0",
            ErrorCode::WalletUserRequired => "User ID is required for wallet transaction",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::DatabaseError => "Storage error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),

            // Catalog
            1003 => Ok(ErrorCode::AddOnNotFound),
            1004 => Ok(ErrorCode::PlanRequired),

            // Offer
            2001 => Ok(ErrorCode::PromoCodeInvalid),
            2002 => Ok(ErrorCode::PromoCodeExpired),
            2003 => Ok(ErrorCode::PromoCodeRequired),

            // Subscription
            3001 => Ok(ErrorCode::SubscriptionNotFound),
            3002 => Ok(ErrorCode::InvalidDuration),
            3003 => Ok(ErrorCode::DateOutsideWindow),

            // Wallet
            4001 => Ok(ErrorCode::InsufficientBalance),
            4002 => Ok(ErrorCode::InvalidAmount),
            4003 => Ok(ErrorCode::WalletUserRequired),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::PlanRequired.code(), 1004);
        assert_eq!(ErrorCode::PromoCodeExpired.code(), 2002);
        assert_eq!(ErrorCode::SubscriptionNotFound.code(), 3001);
        assert_eq!(ErrorCode::InsufficientBalance.code(), 4001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_covers_every_code() {
        let all = [
            ErrorCode::Success,
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::AlreadyExists,
            ErrorCode::InvalidRequest,
            ErrorCode::RequiredField,
            ErrorCode::AddOnNotFound,
            ErrorCode::PlanRequired,
            ErrorCode::PromoCodeInvalid,
            ErrorCode::PromoCodeExpired,
            ErrorCode::PromoCodeRequired,
            ErrorCode::SubscriptionNotFound,
            ErrorCode::InvalidDuration,
            ErrorCode::DateOutsideWindow,
            ErrorCode::InsufficientBalance,
            ErrorCode::InvalidAmount,
            ErrorCode::WalletUserRequired,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
            ErrorCode::ConfigError,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unassigned_codes_rejected() {
        for raw in [6u16, 8, 1001, 1002] {
            assert!(ErrorCode::try_from(raw).is_err());
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        assert_eq!(
            InvalidErrorCode(4242).to_string(),
            "invalid error code: 4242"
        );
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::PromoCodeInvalid).unwrap();
        assert_eq!(json, "2001");

        let code: ErrorCode = serde_json::from_str("4001").unwrap();
        assert_eq!(code, ErrorCode::InsufficientBalance);

        assert!(serde_json::from_str::<ErrorCode>("1234").is_err());
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::NotFound.is_success());
    }
}
