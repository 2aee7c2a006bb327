//! Day-level subscription operations
//!
//! Skipping a meal, and adding, buying or moving extra add-ons for a single
//! delivery date. Skips keep the number of deliveries constant by pushing the
//! end date out by one delivery day.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Subscription, WalletTransaction};
use std::sync::Arc;

use crate::db::{AddOnCatalog, SubscriptionRepository};
use crate::pricing::money::{non_negative, to_f64};
use crate::schedule::{extend_end_date, is_excluded_day, next_delivery_date};
use crate::services::WalletService;

#[derive(Clone)]
pub struct SubscriptionService {
    subscriptions: Arc<dyn SubscriptionRepository>,
    catalog: Arc<dyn AddOnCatalog>,
    wallet: WalletService,
}

impl SubscriptionService {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        catalog: Arc<dyn AddOnCatalog>,
        wallet: WalletService,
    ) -> Self {
        Self {
            subscriptions,
            catalog,
            wallet,
        }
    }

    pub async fn get(&self, subscription_id: &str) -> AppResult<Subscription> {
        self.subscriptions
            .find_by_id(subscription_id)
            .await?
            .ok_or_else(|| {
                AppError::new(ErrorCode::SubscriptionNotFound)
                    .with_detail("subscriptionId", subscription_id)
            })
    }

    /// Newest first
    pub async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Subscription>> {
        Ok(self.subscriptions.find_by_user(user_id).await?)
    }

    /// Skip the meal on `date`
    ///
    /// Idempotent. Extra add-ons booked for `date` move to the next delivery
    /// date. When `date` is a delivery day inside the window, the end date
    /// moves out by one delivery day.
    pub async fn skip_meal(&self, subscription_id: &str, date: NaiveDate) -> AppResult<Subscription> {
        let mut sub = self.get(subscription_id).await?;
        if sub.is_skipped(date) {
            return Ok(sub);
        }

        if let Some(moved) = sub.additional_add_ons.remove(&date)
            && !moved.is_empty()
        {
            let next = next_delivery_date(&sub, date);
            merge_add_ons(&mut sub, next.date, moved);
        }

        if sub.covers(date) && !is_excluded_day(sub.weekend_exclusion, date) {
            sub.end_date = extend_end_date(&sub);
        }
        sub.skipped_dates.push(date);
        sub.skipped_dates.sort();

        let sub = self.subscriptions.update(sub).await?;
        tracing::info!(
            subscription_id = %sub.id,
            date = %date,
            end = %sub.end_date,
            "Meal skipped"
        );
        Ok(sub)
    }

    /// Book extra add-ons for one delivery date (no charge)
    pub async fn add_add_ons_for_date(
        &self,
        subscription_id: &str,
        date: NaiveDate,
        add_on_ids: &[String],
    ) -> AppResult<Subscription> {
        let mut sub = self.get(subscription_id).await?;
        ensure_delivery_date(&sub, date)?;

        merge_add_ons(&mut sub, date, add_on_ids.to_vec());
        Ok(self.subscriptions.update(sub).await?)
    }

    /// Book extra add-ons for one delivery date and pay from the wallet
    ///
    /// The wallet is debited before the booking is stored; unknown add-on ids
    /// are rejected up front. A failed save credits the debit back.
    pub async fn purchase_add_ons_for_date(
        &self,
        subscription_id: &str,
        date: NaiveDate,
        add_on_ids: &[String],
        user_id: &str,
    ) -> AppResult<(Subscription, Option<WalletTransaction>)> {
        let mut sub = self.get(subscription_id).await?;
        if sub.user_id != user_id {
            return Err(AppError::validation("Subscription belongs to another user")
                .with_detail("subscriptionId", subscription_id));
        }
        ensure_delivery_date(&sub, date)?;

        let mut amount = Decimal::ZERO;
        for id in add_on_ids {
            let add_on = self.catalog.find_by_id(id).await?.ok_or_else(|| {
                AppError::new(ErrorCode::AddOnNotFound).with_detail("addOnId", id.as_str())
            })?;
            amount = amount.saturating_add(non_negative(add_on.price));
        }

        let reference = format!("addons-{}-{}", subscription_id, date);
        let tx = if amount > Decimal::ZERO {
            Some(
                self.wallet
                    .debit(user_id, to_f64(amount), format!("Add-ons for {}", date), Some(reference.clone()))
                    .await?,
            )
        } else {
            None
        };

        merge_add_ons(&mut sub, date, add_on_ids.to_vec());
        match self.subscriptions.update(sub).await {
            Ok(sub) => Ok((sub, tx)),
            Err(e) => {
                tracing::error!(subscription_id = %subscription_id, date = %date, "Failed to store add-on purchase: {}", e);
                if let Some(tx) = &tx
                    && let Err(reversal) = self
                        .wallet
                        .credit(user_id, tx.amount, format!("Add-ons for {} reversal", date), Some(reference))
                        .await
                {
                    tracing::error!(
                        user_id = %user_id,
                        amount = tx.amount,
                        "Failed to reverse add-on debit: {}",
                        reversal
                    );
                }
                Err(e.into())
            }
        }
    }

    /// Move the extra add-ons of `date` to the next delivery date
    ///
    /// Extends the end date when the next delivery date falls past it.
    pub async fn skip_add_ons_for_date(
        &self,
        subscription_id: &str,
        date: NaiveDate,
    ) -> AppResult<Subscription> {
        let mut sub = self.get(subscription_id).await?;
        let items = match sub.additional_add_ons.remove(&date) {
            Some(items) if !items.is_empty() => items,
            _ => return Ok(sub),
        };

        let next = next_delivery_date(&sub, date);
        merge_add_ons(&mut sub, next.date, items);
        if next.past_end {
            sub.end_date = extend_end_date(&sub);
        }

        let sub = self.subscriptions.update(sub).await?;
        tracing::info!(
            subscription_id = %sub.id,
            from = %date,
            to = %next.date,
            "Add-ons moved"
        );
        Ok(sub)
    }
}

/// Append ids to a date's extra add-ons, keeping first-seen order and no duplicates
fn merge_add_ons(sub: &mut Subscription, date: NaiveDate, ids: Vec<String>) {
    let entry = sub.additional_add_ons.entry(date).or_default();
    for id in ids {
        if !entry.contains(&id) {
            entry.push(id);
        }
    }
}

fn ensure_delivery_date(sub: &Subscription, date: NaiveDate) -> AppResult<()> {
    if !sub.covers(date) || is_excluded_day(sub.weekend_exclusion, date) {
        return Err(AppError::new(ErrorCode::DateOutsideWindow)
            .with_detail("date", date.to_string())
            .with_detail("startDate", sub.start_date.to_string())
            .with_detail("endDate", sub.end_date.to_string()));
    }
    Ok(())
}
