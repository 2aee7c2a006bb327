//! Manual subscription totals
//!
//! Admin-created subscriptions are priced per item and per plan day, with
//! the plan's percentage discount applied to the subtotal and a flat
//! delivery fee on top.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{AddOn, Meal, Plan};

use super::money::{non_negative, to_decimal, to_f64};

/// Meal picked by an admin, with quantity per delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualMealLine {
    pub meal: Meal,
    pub quantity: u32,
}

/// Add-on picked by an admin, with quantity per delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualAddOnLine {
    pub add_on: AddOn,
    pub quantity: u32,
}

/// Totals of a manual subscription
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualTotals {
    pub meal_total: f64,
    pub add_on_total: f64,
    pub subtotal: f64,
    pub discount: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

/// Price a manual subscription; all-zero without a plan
pub fn calculate_manual_totals(
    meals: &[ManualMealLine],
    add_ons: &[ManualAddOnLine],
    plan: Option<&Plan>,
    delivery_fee: f64,
) -> ManualTotals {
    let Some(plan) = plan else {
        return ManualTotals::default();
    };
    let days = Decimal::from(plan.duration);

    let meal_total = meals
        .iter()
        .map(|line| line_amount(line.meal.price, line.quantity, days))
        .fold(Decimal::ZERO, Decimal::saturating_add);
    let add_on_total = add_ons
        .iter()
        .map(|line| line_amount(line.add_on.price, line.quantity, days))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let subtotal = meal_total.saturating_add(add_on_total);
    let pct = to_decimal(plan.discount_percent).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let discount = subtotal * (pct / Decimal::ONE_HUNDRED);
    let delivery_fee = non_negative(delivery_fee);
    let total = (subtotal - discount).saturating_add(delivery_fee).max(Decimal::ZERO);

    ManualTotals {
        meal_total: to_f64(meal_total),
        add_on_total: to_f64(add_on_total),
        subtotal: to_f64(subtotal),
        discount: to_f64(discount),
        delivery_fee: to_f64(delivery_fee),
        total: to_f64(total),
    }
}

fn line_amount(price: f64, quantity: u32, days: Decimal) -> Decimal {
    non_negative(price)
        .saturating_mul(Decimal::from(quantity))
        .saturating_mul(days)
}
