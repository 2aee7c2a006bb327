//! Repository traits

use async_trait::async_trait;
use shared::models::{
    AddOn, Offer, Subscription, SubscriptionCreate, WalletTransaction, WalletTransactionCreate,
};

use super::RepoResult;

/// Subscription storage
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Subscription>>;
    async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<Subscription>>;
    async fn create(&self, data: SubscriptionCreate) -> RepoResult<Subscription>;
    /// Replace a stored subscription; fails with `NotFound` if it does not exist
    async fn update(&self, subscription: Subscription) -> RepoResult<Subscription>;
}

/// Offer lookup
#[async_trait]
pub trait OfferRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Offer>>;
}

/// Add-on catalog
#[async_trait]
pub trait AddOnCatalog: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<AddOn>>;
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<AddOn>>;
}

/// Wallet transaction ledger
///
/// Implementations must apply `post` atomically per user: a debit never
/// succeeds when the balance is short, and the balance never drops below zero.
#[async_trait]
pub trait WalletLedger: Send + Sync {
    async fn balance(&self, user_id: &str) -> RepoResult<f64>;
    /// Newest first
    async fn transactions(&self, user_id: &str) -> RepoResult<Vec<WalletTransaction>>;
    async fn post(&self, tx: WalletTransactionCreate) -> RepoResult<WalletTransaction>;
}
