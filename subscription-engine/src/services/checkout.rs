//! Checkout
//!
//! Consumes a [`SubscriptionDraft`] exactly once: prices it, projects the
//! delivery window, debits the wallet share and persists the subscription.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Subscription, SubscriptionCreate, SubscriptionDraft, SubscriptionStatus, WalletTransaction,
};
use std::sync::Arc;

use crate::db::SubscriptionRepository;
use crate::pricing::{OrderPriceCalculator, OrderSummary, TRIAL_DAYS, TrialPricing};
use crate::schedule::compute_end_date;
use crate::services::WalletService;
use crate::utils::time::validate_not_past;

/// Checkout submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub user_id: String,
    pub address_id: String,
    pub delivery_time: Option<String>,
    pub special_instructions: Option<String>,
    pub draft: SubscriptionDraft,
}

/// Result of a successful checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub subscription: Subscription,
    pub summary: OrderSummary,
    pub wallet_transaction: Option<WalletTransaction>,
}

#[derive(Clone)]
pub struct CheckoutService {
    subscriptions: Arc<dyn SubscriptionRepository>,
    wallet: WalletService,
    calculator: OrderPriceCalculator,
    /// Decides which calendar day "today" is for start-date checks
    timezone: Tz,
}

impl CheckoutService {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        wallet: WalletService,
        calculator: OrderPriceCalculator,
    ) -> Self {
        Self {
            subscriptions,
            wallet,
            calculator,
            timezone: chrono_tz::Asia::Kolkata,
        }
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Price a draft without submitting it
    pub fn quote(&self, draft: &SubscriptionDraft, now: DateTime<Utc>) -> OrderSummary {
        self.calculator.summarize(draft, now)
    }

    /// Submit a checkout
    ///
    /// The start date may not lie before today in the business timezone.
    /// The wallet balance on the draft is refreshed from the ledger before
    /// pricing. If persisting fails after the wallet was debited, the debit
    /// is reversed with a credit.
    pub async fn submit(
        &self,
        request: CheckoutRequest,
        now: DateTime<Utc>,
    ) -> AppResult<CheckoutReceipt> {
        self.validate(&request)?;
        validate_not_past(request.draft.start_date, now, self.timezone)?;

        let CheckoutRequest {
            user_id,
            address_id,
            delivery_time,
            special_instructions,
            mut draft,
        } = request;

        if draft.wallet_applied {
            draft.wallet_balance = self.wallet.balance(&user_id).await?;
        }

        let summary = self.calculator.summarize(&draft, now);
        if summary.duration < 1 {
            return Err(AppError::new(ErrorCode::InvalidDuration).with_detail("duration", summary.duration));
        }
        let end_date = compute_end_date(draft.start_date, summary.duration, draft.week_type);

        let wallet_transaction = if summary.wallet_applied_amount > 0.0 {
            let reference = format!("sub-wallet-{}", uuid::Uuid::new_v4());
            let tx = self
                .wallet
                .debit(
                    &user_id,
                    summary.wallet_applied_amount,
                    "Subscription payment",
                    Some(reference),
                )
                .await?;
            Some(tx)
        } else {
            None
        };

        let meal_id = draft.meal.as_ref().map(|m| m.id.clone()).unwrap_or_default();
        let plan_id = match &draft.plan {
            Some(plan) if !self.is_meal_doubling_trial(&draft) => plan.id.clone(),
            _ => format!("trial-{}", TRIAL_DAYS),
        };
        let exclusion = draft.week_type.weekend_exclusion();

        let create = SubscriptionCreate {
            user_id: user_id.clone(),
            meal_id,
            plan_id,
            start_date: draft.start_date,
            end_date,
            delivery_time,
            week_type: draft.week_type,
            weekend_exclusion: exclusion,
            exclude_weekends: exclusion.exclude_weekends(),
            address_id,
            add_ons: draft.add_on_ids(),
            total_amount: summary.payable_amount,
            paid_amount: summary.payable_amount,
            total_deliveries: summary.duration,
            remaining_deliveries: summary.duration,
            status: SubscriptionStatus::Active,
            special_instructions,
        };

        let subscription = match self.subscriptions.create(create).await {
            Ok(sub) => sub,
            Err(e) => {
                tracing::error!(user_id = %user_id, "Failed to persist subscription: {}", e);
                if let Some(tx) = &wallet_transaction
                    && let Err(reversal) = self
                        .wallet
                        .credit(&user_id, tx.amount, "Subscription payment reversal", tx.reference_id.clone())
                        .await
                {
                    tracing::error!(
                        user_id = %user_id,
                        amount = tx.amount,
                        reference = tx.reference_id.as_deref().unwrap_or("-"),
                        "Failed to reverse wallet debit: {}",
                        reversal
                    );
                }
                return Err(e.into());
            }
        };

        tracing::info!(
            subscription_id = %subscription.id,
            user_id = %subscription.user_id,
            start = %subscription.start_date,
            end = %subscription.end_date,
            payable = summary.payable_amount,
            wallet = summary.wallet_applied_amount,
            "Subscription created"
        );

        Ok(CheckoutReceipt {
            subscription,
            summary,
            wallet_transaction,
        })
    }

    fn is_meal_doubling_trial(&self, draft: &SubscriptionDraft) -> bool {
        draft.is_trial_mode && self.calculator.options().trial_pricing == TrialPricing::MealDoubling
    }

    fn validate(&self, request: &CheckoutRequest) -> AppResult<()> {
        if request.user_id.trim().is_empty() {
            return Err(AppError::required_field("userId"));
        }
        if request.address_id.trim().is_empty() {
            return Err(AppError::required_field("addressId"));
        }

        let draft = &request.draft;
        if draft.meal.is_none() {
            return Err(AppError::required_field("meal"));
        }
        if !self.is_meal_doubling_trial(draft) {
            match &draft.plan {
                None => return Err(AppError::new(ErrorCode::PlanRequired)),
                Some(plan) if plan.duration < 1 => {
                    return Err(AppError::new(ErrorCode::InvalidDuration)
                        .with_detail("planId", plan.id.clone())
                        .with_detail("duration", plan.duration));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
