//! In-memory repositories backed by DashMap

use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::prelude::*;
use shared::models::{
    AddOn, Offer, Subscription, SubscriptionCreate, TransactionType, WalletTransaction,
    WalletTransactionCreate,
};
use shared::util::{new_id, now_millis};
use std::sync::Arc;

use super::repository::{AddOnCatalog, OfferRepository, SubscriptionRepository, WalletLedger};
use super::{RepoError, RepoResult};
use crate::pricing::money::{to_decimal, to_f64};

// ==================== Subscriptions ====================

#[derive(Default, Clone)]
pub struct InMemorySubscriptionRepository {
    subscriptions: Arc<DashMap<String, Subscription>>,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Subscription>> {
        Ok(self.subscriptions.get(id).map(|r| r.value().clone()))
    }

    async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<Subscription>> {
        let mut subs: Vec<Subscription> = self
            .subscriptions
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| r.value().clone())
            .collect();
        subs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(subs)
    }

    async fn create(&self, data: SubscriptionCreate) -> RepoResult<Subscription> {
        let sub = data.into_subscription(new_id("sub"), now_millis());
        self.subscriptions.insert(sub.id.clone(), sub.clone());
        Ok(sub)
    }

    async fn update(&self, subscription: Subscription) -> RepoResult<Subscription> {
        match self.subscriptions.get_mut(&subscription.id) {
            Some(mut entry) => {
                *entry = subscription.clone();
                Ok(subscription)
            }
            None => Err(RepoError::NotFound(format!(
                "subscription {}",
                subscription.id
            ))),
        }
    }
}

// ==================== Offers ====================

#[derive(Default, Clone)]
pub struct InMemoryOfferRepository {
    offers: Arc<DashMap<String, Offer>>,
}

impl InMemoryOfferRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, offer: Offer) {
        self.offers.insert(offer.id.clone(), offer);
    }
}

#[async_trait]
impl OfferRepository for InMemoryOfferRepository {
    async fn find_all(&self) -> RepoResult<Vec<Offer>> {
        let mut offers: Vec<Offer> = self.offers.iter().map(|r| r.value().clone()).collect();
        offers.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(offers)
    }
}

// ==================== Add-on catalog ====================

#[derive(Default, Clone)]
pub struct InMemoryAddOnCatalog {
    add_ons: Arc<DashMap<String, AddOn>>,
}

impl InMemoryAddOnCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, add_on: AddOn) {
        self.add_ons.insert(add_on.id.clone(), add_on);
    }
}

#[async_trait]
impl AddOnCatalog for InMemoryAddOnCatalog {
    async fn find_all(&self) -> RepoResult<Vec<AddOn>> {
        let mut add_ons: Vec<AddOn> = self.add_ons.iter().map(|r| r.value().clone()).collect();
        add_ons.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(add_ons)
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<AddOn>> {
        Ok(self.add_ons.get(id).map(|r| r.value().clone()))
    }
}

// ==================== Wallet ledger ====================

#[derive(Debug, Default)]
struct WalletAccount {
    balance: Decimal,
    transactions: Vec<WalletTransaction>,
}

#[derive(Default, Clone)]
pub struct InMemoryWalletLedger {
    accounts: Arc<DashMap<String, WalletAccount>>,
}

impl InMemoryWalletLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalletLedger for InMemoryWalletLedger {
    async fn balance(&self, user_id: &str) -> RepoResult<f64> {
        Ok(self
            .accounts
            .get(user_id)
            .map(|a| to_f64(a.balance))
            .unwrap_or_default())
    }

    async fn transactions(&self, user_id: &str) -> RepoResult<Vec<WalletTransaction>> {
        let mut txs = self
            .accounts
            .get(user_id)
            .map(|a| a.transactions.clone())
            .unwrap_or_default();
        txs.reverse();
        Ok(txs)
    }

    async fn post(&self, tx: WalletTransactionCreate) -> RepoResult<WalletTransaction> {
        if tx.user_id.trim().is_empty() {
            return Err(RepoError::Validation("user id is required".into()));
        }
        let amount = to_decimal(tx.amount);
        if amount <= Decimal::ZERO {
            return Err(RepoError::Validation(format!(
                "amount must be positive: {}",
                tx.amount
            )));
        }

        // The entry guard holds the shard lock for the whole check-and-apply
        let mut account = self.accounts.entry(tx.user_id.clone()).or_default();
        let balance = match tx.kind {
            TransactionType::Credit => account.balance + amount,
            TransactionType::Debit => {
                if account.balance < amount {
                    return Err(RepoError::InsufficientBalance {
                        available: to_f64(account.balance),
                        requested: tx.amount,
                    });
                }
                (account.balance - amount).max(Decimal::ZERO)
            }
        };

        let record = WalletTransaction {
            id: new_id("txn"),
            user_id: tx.user_id,
            kind: tx.kind,
            amount: to_f64(amount),
            description: tx.description,
            reference_id: tx.reference_id,
            created_at: now_millis(),
        };
        account.balance = balance;
        account.transactions.push(record.clone());
        Ok(record)
    }
}

// ==================== Failure injection (tests) ====================

/// Reads from an inner repository; every write fails with a database error
#[cfg(test)]
#[derive(Default, Clone)]
pub(crate) struct ReadOnlySubscriptionRepository {
    pub inner: InMemorySubscriptionRepository,
}

#[cfg(test)]
#[async_trait]
impl SubscriptionRepository for ReadOnlySubscriptionRepository {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Subscription>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<Subscription>> {
        self.inner.find_by_user(user_id).await
    }

    async fn create(&self, _data: SubscriptionCreate) -> RepoResult<Subscription> {
        Err(RepoError::Database("connection reset".into()))
    }

    async fn update(&self, _subscription: Subscription) -> RepoResult<Subscription> {
        Err(RepoError::Database("connection reset".into()))
    }
}

/// Ledger that accepts debits but rejects every credit
#[cfg(test)]
#[derive(Default, Clone)]
pub(crate) struct DebitOnlyWalletLedger {
    pub inner: InMemoryWalletLedger,
}

#[cfg(test)]
#[async_trait]
impl WalletLedger for DebitOnlyWalletLedger {
    async fn balance(&self, user_id: &str) -> RepoResult<f64> {
        self.inner.balance(user_id).await
    }

    async fn transactions(&self, user_id: &str) -> RepoResult<Vec<WalletTransaction>> {
        self.inner.transactions(user_id).await
    }

    async fn post(&self, tx: WalletTransactionCreate) -> RepoResult<WalletTransaction> {
        match tx.kind {
            TransactionType::Debit => self.inner.post(tx).await,
            TransactionType::Credit => Err(RepoError::Validation("ledger is closed for credits".into())),
        }
    }
}
