//! Order Price Calculator
//!
//! Itemizes a subscription draft in a fixed order, each stage working on the
//! previous stage's result:
//!
//! 1. Meal base (trial strategy or plan price) and plan-level discount
//! 2. Add-ons weighted by their day selection
//! 3. Trial discount
//! 4. Base subtotal (+ delivery fee)
//! 5. Promo discount
//! 6. Wallet deduction
//! 7. Payable amount
//!
//! Every monetary field of [`OrderSummary`] is non-negative.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::SubscriptionDraft;

use super::add_on_calculator::{AddOnLine, UnsetAddOnDays, calculate_add_ons, days_per_week};
use super::money::{non_negative, to_f64};
use super::promo::calculate_promo_discount;
use super::trial::{TrialPricing, resolve_meal_base};

/// Itemized price of a subscription draft
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Meal base price
    pub meal_total: f64,
    pub add_on_total: f64,
    /// Same as `base_subtotal`
    pub subtotal: f64,
    /// Plan-level discount (informational, already in the plan price)
    pub discount: f64,
    pub trial_discount: f64,
    pub promo_discount: f64,
    pub wallet_applied_amount: f64,
    pub delivery_fee: f64,
    pub payable_amount: f64,
    /// Delivery days priced
    pub duration: u32,
    pub base_subtotal: f64,
    pub subtotal_after_promo: f64,
    pub add_on_lines: Vec<AddOnLine>,
}

/// Calculator settings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PricingOptions {
    pub trial_pricing: TrialPricing,
    pub unset_add_on_days: UnsetAddOnDays,
    pub delivery_fee: f64,
}

/// Order price calculator
#[derive(Debug, Clone, Default)]
pub struct OrderPriceCalculator {
    options: PricingOptions,
}

impl OrderPriceCalculator {
    pub fn new(options: PricingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PricingOptions {
        &self.options
    }

    /// Itemize `draft`, checking promo validity against `now`
    ///
    /// Returns an all-zero summary when the meal (or plan, where needed) is
    /// missing.
    pub fn summarize(&self, draft: &SubscriptionDraft, now: DateTime<Utc>) -> OrderSummary {
        // Step 1: Meal base
        let Some(base) = resolve_meal_base(draft, self.options.trial_pricing) else {
            return OrderSummary::default();
        };
        let duration = base.duration;

        // Step 2: Add-ons
        let per_week = days_per_week(draft.week_type, draft.is_trial_mode);
        let add_ons = calculate_add_ons(
            &draft.add_ons,
            duration,
            per_week,
            self.options.unset_add_on_days,
        );

        // Step 3-4: Trial discount and base subtotal
        let delivery_fee = non_negative(self.options.delivery_fee);
        let base_subtotal = base
            .meal_base
            .saturating_add(add_ons.total)
            .saturating_add(delivery_fee)
            .saturating_sub(base.trial_discount)
            .max(Decimal::ZERO);

        // Step 5: Promo
        let promo_discount = match &draft.applied_offer {
            Some(offer) => {
                calculate_promo_discount(offer, base_subtotal, base.plan_price, duration, now)
            }
            None => Decimal::ZERO,
        };
        let after_promo = (base_subtotal - promo_discount).max(Decimal::ZERO);

        // Step 6: Wallet
        let wallet_applied = if draft.wallet_applied {
            non_negative(draft.wallet_balance).min(after_promo)
        } else {
            Decimal::ZERO
        };

        // Step 7: Payable
        let payable = (after_promo - wallet_applied).max(Decimal::ZERO);

        OrderSummary {
            meal_total: to_f64(base.meal_base),
            add_on_total: to_f64(add_ons.total),
            subtotal: to_f64(base_subtotal),
            discount: to_f64(base.plan_discount),
            trial_discount: to_f64(base.trial_discount),
            promo_discount: to_f64(promo_discount),
            wallet_applied_amount: to_f64(wallet_applied),
            delivery_fee: to_f64(delivery_fee),
            payable_amount: to_f64(payable),
            duration,
            base_subtotal: to_f64(base_subtotal),
            subtotal_after_promo: to_f64(after_promo),
            add_on_lines: add_ons.lines,
        }
    }
}

/// Itemize `draft` with default settings at the current instant
pub fn compute_order_summary(draft: &SubscriptionDraft) -> OrderSummary {
    compute_order_summary_at(draft, Utc::now())
}

/// Itemize `draft` with default settings at `now`
pub fn compute_order_summary_at(draft: &SubscriptionDraft, now: DateTime<Utc>) -> OrderSummary {
    OrderPriceCalculator::default().summarize(draft, now)
}

// ==================== Tests ====================
