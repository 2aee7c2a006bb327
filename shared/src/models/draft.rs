//! Subscription Draft
//!
//! Ephemeral selection state collected before checkout. Never persisted as-is;
//! checkout turns it into a [`SubscriptionCreate`](super::SubscriptionCreate).

use super::{AddOn, DaySelection, Meal, MealVariant, Offer, Plan, SelectedAddOn, WeekType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDraft {
    pub meal: Option<Meal>,
    pub meal_variant: Option<MealVariant>,
    pub plan: Option<Plan>,
    #[serde(default)]
    pub week_type: WeekType,
    #[serde(default)]
    pub is_trial_mode: bool,
    #[serde(default)]
    pub add_ons: Vec<SelectedAddOn>,
    pub applied_offer: Option<Offer>,
    #[serde(default)]
    pub wallet_applied: bool,
    /// Read from the user profile
    #[serde(default)]
    pub wallet_balance: f64,
    pub start_date: NaiveDate,
}

impl SubscriptionDraft {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            meal: None,
            meal_variant: None,
            plan: None,
            week_type: WeekType::default(),
            is_trial_mode: false,
            add_ons: vec![],
            applied_offer: None,
            wallet_applied: false,
            wallet_balance: 0.0,
            start_date,
        }
    }

    pub fn with_meal(mut self, meal: Meal) -> Self {
        self.meal = Some(meal);
        self
    }

    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn with_week_type(mut self, week_type: WeekType) -> Self {
        self.week_type = week_type;
        self
    }

    pub fn with_trial(mut self, is_trial_mode: bool) -> Self {
        self.is_trial_mode = is_trial_mode;
        self
    }

    pub fn with_add_on(mut self, add_on: AddOn, days: DaySelection) -> Self {
        self.add_ons.push(SelectedAddOn::new(add_on, days));
        self
    }

    pub fn with_offer(mut self, offer: Offer) -> Self {
        self.applied_offer = Some(offer);
        self
    }

    pub fn with_wallet(mut self, balance: f64) -> Self {
        self.wallet_applied = true;
        self.wallet_balance = balance;
        self
    }

    /// Add-on ids in selection order; day selections are dropped at the
    /// persistence boundary
    pub fn add_on_ids(&self) -> Vec<String> {
        self.add_ons.iter().map(|a| a.add_on.id.clone()).collect()
    }
}
