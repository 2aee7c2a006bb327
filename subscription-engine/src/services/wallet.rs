//! Wallet service
//!
//! Thin validation layer over a [`WalletLedger`] mapping ledger failures onto
//! wallet error codes.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{TransactionType, WalletTransaction, WalletTransactionCreate};
use std::sync::Arc;

use crate::db::{RepoError, WalletLedger};

#[derive(Clone)]
pub struct WalletService {
    ledger: Arc<dyn WalletLedger>,
}

impl WalletService {
    pub fn new(ledger: Arc<dyn WalletLedger>) -> Self {
        Self { ledger }
    }

    pub async fn balance(&self, user_id: &str) -> AppResult<f64> {
        Ok(self.ledger.balance(user_id).await?)
    }

    pub async fn history(&self, user_id: &str) -> AppResult<Vec<WalletTransaction>> {
        Ok(self.ledger.transactions(user_id).await?)
    }

    pub async fn credit(
        &self,
        user_id: &str,
        amount: f64,
        description: impl Into<String>,
        reference_id: Option<String>,
    ) -> AppResult<WalletTransaction> {
        self.post(user_id, TransactionType::Credit, amount, description.into(), reference_id)
            .await
    }

    pub async fn debit(
        &self,
        user_id: &str,
        amount: f64,
        description: impl Into<String>,
        reference_id: Option<String>,
    ) -> AppResult<WalletTransaction> {
        self.post(user_id, TransactionType::Debit, amount, description.into(), reference_id)
            .await
    }

    async fn post(
        &self,
        user_id: &str,
        kind: TransactionType,
        amount: f64,
        description: String,
        reference_id: Option<String>,
    ) -> AppResult<WalletTransaction> {
        if user_id.trim().is_empty() {
            return Err(AppError::new(ErrorCode::WalletUserRequired));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::new(ErrorCode::InvalidAmount).with_detail("amount", amount.to_string()));
        }

        let tx = WalletTransactionCreate {
            user_id: user_id.to_string(),
            kind,
            amount,
            description,
            reference_id,
        };

        match self.ledger.post(tx).await {
            Ok(record) => {
                tracing::info!(
                    user_id = %record.user_id,
                    kind = ?record.kind,
                    amount = record.amount,
                    reference = record.reference_id.as_deref().unwrap_or("-"),
                    "Wallet transaction posted"
                );
                Ok(record)
            }
            Err(e @ RepoError::InsufficientBalance { .. }) => {
                tracing::warn!(user_id = %user_id, amount, "Wallet debit rejected: {}", e);
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryWalletLedger;

    fn service() -> WalletService {
        WalletService::new(Arc::new(InMemoryWalletLedger::new()))
    }

    #[tokio::test]
    async fn test_credit_and_debit() {
        let wallet = service();
        wallet.credit("u1", 300.0, "Top up", None).await.unwrap();
        let tx = wallet
            .debit("u1", 120.0, "Order", Some("ref-1".into()))
            .await
            .unwrap();

        assert_eq!(tx.kind, TransactionType::Debit);
        assert_eq!(tx.reference_id.as_deref(), Some("ref-1"));
        assert_eq!(wallet.balance("u1").await.unwrap(), 180.0);
        assert_eq!(wallet.history("u1").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_error_codes() {
        let wallet = service();

        let err = wallet.credit("  ", 10.0, "x", None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::WalletUserRequired);

        let err = wallet.credit("u1", -5.0, "x", None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAmount);

        let err = wallet.credit("u1", f64::NAN, "x", None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAmount);

        let err = wallet.debit("u1", 10.0, "x", None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientBalance);
    }
}
