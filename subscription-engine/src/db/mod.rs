//! Persistence seams
//!
//! Services talk to storage only through the traits in [`repository`].
//! [`memory`] provides DashMap-backed implementations for tests, the quote
//! binary and embedding callers without a backend.

pub mod memory;
pub mod repository;

pub use memory::{
    InMemoryAddOnCatalog, InMemoryOfferRepository, InMemorySubscriptionRepository,
    InMemoryWalletLedger,
};
pub use repository::{AddOnCatalog, OfferRepository, SubscriptionRepository, WalletLedger};

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance { available: f64, requested: f64 },
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::InsufficientBalance {
                available,
                requested,
            } => AppError::new(ErrorCode::InsufficientBalance)
                .with_detail("available", available)
                .with_detail("requested", requested),
        }
    }
}
