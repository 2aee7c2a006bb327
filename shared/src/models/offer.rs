//! Offer Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How an offer's discount value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// `discount_value` is an amount
    Fixed,
    /// `discount_value` is a percentage (10 = 10%)
    Percentage,
    /// Credited to the wallet later, no up-front discount
    Cashback,
}

/// What the offer grants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenefitType {
    #[default]
    Amount,
    /// One free day's meal
    Meal,
}

/// Promotional offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    /// Cap for percentage discounts
    pub max_discount: Option<f64>,
    pub benefit_type: Option<BenefitType>,
    pub promo_code: Option<String>,
    /// Older records carry the code here instead of `promo_code`
    pub code: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    pub is_active: bool,
}

impl Offer {
    /// The code a customer types to redeem this offer
    pub fn redeem_code(&self) -> Option<&str> {
        self.promo_code.as_deref().or(self.code.as_deref())
    }

    /// Case-insensitive match against a user-entered code
    pub fn matches_code(&self, code: &str) -> bool {
        let wanted = code.trim();
        !wanted.is_empty()
            && self
                .redeem_code()
                .is_some_and(|c| c.trim().eq_ignore_ascii_case(wanted))
    }

    /// Whether `now` lies inside `[valid_from, valid_to]`
    pub fn is_within_window(&self, now: DateTime<Utc>) -> bool {
        self.valid_from <= now && now <= self.valid_to
    }

    /// Active and inside its validity window
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.is_within_window(now)
    }

    pub fn benefit(&self) -> BenefitType {
        self.benefit_type.unwrap_or_default()
    }
}
