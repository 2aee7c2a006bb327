//! Trial pricing strategies
//!
//! Two formulas exist for pricing a trial:
//! - [`TrialPricing::MealDoubling`]: two days of the chosen meal, plan ignored
//! - [`TrialPricing::PlanHalving`]: half of the selected plan's discounted price
//!
//! Outside trial mode both strategies price the selected plan.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::SubscriptionDraft;
use std::fmt;
use std::str::FromStr;

use super::money::{non_negative, to_decimal};

/// Fixed trial window, in delivery days
pub const TRIAL_DAYS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrialPricing {
    #[default]
    MealDoubling,
    PlanHalving,
}

impl TrialPricing {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MealDoubling => "meal-doubling",
            Self::PlanHalving => "plan-halving",
        }
    }
}

impl fmt::Display for TrialPricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrialPricing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meal-doubling" => Ok(Self::MealDoubling),
            "plan-halving" => Ok(Self::PlanHalving),
            other => Err(format!("unknown trial pricing: {}", other)),
        }
    }
}

/// Meal-level figures feeding the order summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealBase {
    pub meal_base: Decimal,
    /// Informational `original - discounted` of the plan
    pub plan_discount: Decimal,
    pub trial_discount: Decimal,
    /// Delivery days priced
    pub duration: u32,
    /// Price used for the "one free meal" promo benefit
    pub plan_price: Decimal,
}

/// Resolve the meal base for a draft, or `None` when required selections
/// are missing
///
/// A meal is always required. A plan is required unless the draft is a
/// meal-doubling trial.
pub fn resolve_meal_base(draft: &SubscriptionDraft, strategy: TrialPricing) -> Option<MealBase> {
    let meal = draft.meal.as_ref()?;

    if draft.is_trial_mode && strategy == TrialPricing::MealDoubling {
        let meal_base = non_negative(meal.unit_price(draft.meal_variant)) * Decimal::from(2);
        return Some(MealBase {
            meal_base,
            plan_discount: Decimal::ZERO,
            trial_discount: Decimal::ZERO,
            duration: TRIAL_DAYS,
            plan_price: meal_base,
        });
    }

    let plan = draft.plan.as_ref()?;
    let discounted = non_negative(plan.discounted_price);
    let plan_discount = (to_decimal(plan.original_price) - discounted).max(Decimal::ZERO);
    let trial_discount = if draft.is_trial_mode {
        discounted * Decimal::new(5, 1)
    } else {
        Decimal::ZERO
    };

    Some(MealBase {
        meal_base: discounted,
        plan_discount,
        trial_discount,
        duration: plan.duration,
        plan_price: discounted,
    })
}
