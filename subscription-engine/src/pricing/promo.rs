//! Promo discount
//!
//! The calculator only prices offers; whether a code may be applied at all is
//! decided upstream (see `services::offer`). An offer outside its validity
//! window at calculation time contributes nothing.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use shared::models::{BenefitType, DiscountType, Offer};

use super::money::{non_negative, round_whole, to_decimal};

/// Calculate the promo discount for an applied offer
///
/// # Arguments
/// * `offer` - The applied offer
/// * `base_subtotal` - Subtotal before promo
/// * `plan_price` - Price of the whole plan, used for the free-meal benefit
/// * `duration` - Delivery days in the plan
/// * `now` - Evaluation instant for the validity window
///
/// # Rules
/// - `meal` benefit: one day's share of the plan, rounded to a whole unit
/// - `fixed`: the value, capped at `base_subtotal`
/// - `percentage`: clamped to 0..=100, capped at `max_discount` and `base_subtotal`
/// - `cashback`: nothing up front
pub fn calculate_promo_discount(
    offer: &Offer,
    base_subtotal: Decimal,
    plan_price: Decimal,
    duration: u32,
    now: DateTime<Utc>,
) -> Decimal {
    if !offer.is_valid_at(now) {
        tracing::debug!(offer_id = %offer.id, "Offer not valid at {}, ignoring", now);
        return Decimal::ZERO;
    }

    let base = base_subtotal.max(Decimal::ZERO);

    if offer.benefit() == BenefitType::Meal {
        let days = Decimal::from(duration.max(1));
        return round_whole(plan_price / days).max(Decimal::ZERO);
    }

    match offer.discount_type {
        DiscountType::Fixed => non_negative(offer.discount_value).min(base),
        DiscountType::Percentage => {
            let pct = to_decimal(offer.discount_value).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
            let raw = base * (pct / Decimal::ONE_HUNDRED);
            let capped = match offer.max_discount {
                Some(max) => raw.min(non_negative(max)),
                None => raw,
            };
            capped.min(base)
        }
        DiscountType::Cashback => Decimal::ZERO,
    }
}
