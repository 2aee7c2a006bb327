//! Subscription Model

use super::week_type::{WeekType, WeekendExclusion};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Subscription lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Paused,
    Cancelled,
    Completed,
}

/// Persisted subscription record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub meal_id: String,
    pub plan_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub delivery_time: Option<String>,
    pub week_type: WeekType,
    pub weekend_exclusion: WeekendExclusion,
    pub exclude_weekends: bool,
    pub address_id: String,
    /// Add-on ids only
    #[serde(default)]
    pub add_ons: Vec<String>,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub total_deliveries: u32,
    pub remaining_deliveries: u32,
    pub status: SubscriptionStatus,
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub skipped_dates: Vec<NaiveDate>,
    /// Extra add-ons bought for a single delivery date
    #[serde(default)]
    pub additional_add_ons: BTreeMap<NaiveDate, Vec<String>>,
    /// Unix millis
    pub created_at: i64,
}

impl Subscription {
    pub fn is_skipped(&self, date: NaiveDate) -> bool {
        self.skipped_dates.contains(&date)
    }

    /// Whether `date` lies inside `[start_date, end_date]`
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Create subscription payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCreate {
    pub user_id: String,
    pub meal_id: String,
    pub plan_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub delivery_time: Option<String>,
    pub week_type: WeekType,
    pub weekend_exclusion: WeekendExclusion,
    pub exclude_weekends: bool,
    pub address_id: String,
    pub add_ons: Vec<String>,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub total_deliveries: u32,
    pub remaining_deliveries: u32,
    pub status: SubscriptionStatus,
    pub special_instructions: Option<String>,
}

impl SubscriptionCreate {
    /// Materialize the record with a storage-assigned id
    pub fn into_subscription(self, id: String, created_at: i64) -> Subscription {
        Subscription {
            id,
            user_id: self.user_id,
            meal_id: self.meal_id,
            plan_id: self.plan_id,
            start_date: self.start_date,
            end_date: self.end_date,
            delivery_time: self.delivery_time,
            week_type: self.week_type,
            weekend_exclusion: self.weekend_exclusion,
            exclude_weekends: self.exclude_weekends,
            address_id: self.address_id,
            add_ons: self.add_ons,
            total_amount: self.total_amount,
            paid_amount: self.paid_amount,
            total_deliveries: self.total_deliveries,
            remaining_deliveries: self.remaining_deliveries,
            status: self.status,
            special_instructions: self.special_instructions,
            skipped_dates: vec![],
            additional_add_ons: BTreeMap::new(),
            created_at,
        }
    }
}
