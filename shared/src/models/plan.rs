//! Plan Model

use serde::{Deserialize, Serialize};

/// Subscription plan (catalog or dynamically built)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Number of delivery days (not calendar days)
    pub duration: u32,
    pub original_price: f64,
    pub discounted_price: f64,
    /// Percentage discount used by manually created subscriptions (20 = 20%)
    #[serde(default)]
    pub discount_percent: f64,
}
