//! Add-on Price Calculator
//!
//! An add-on is charged once per delivery day it applies to. How many days
//! that is depends on the customer's [`DaySelection`]:
//!
//! | Selection | Occurrences |
//! |-----------|-------------|
//! | `AllDays` | `duration` |
//! | `SpecificDays(k)` | `min(duration, ceil(duration / days_per_week) * k)` |
//! | `Unset` | per [`UnsetAddOnDays`] |

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{DaySelection, SelectedAddOn, WeekType};
use std::fmt;
use std::str::FromStr;

use super::money::{non_negative, to_f64};
use super::trial::TRIAL_DAYS;

/// How an add-on without a day selection is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnsetAddOnDays {
    /// Every delivery day
    #[default]
    AllDays,
    /// Only the first delivery day of each week
    FirstDay,
}

impl UnsetAddOnDays {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllDays => "all-days",
            Self::FirstDay => "first-day",
        }
    }
}

impl fmt::Display for UnsetAddOnDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnsetAddOnDays {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all-days" => Ok(Self::AllDays),
            "first-day" => Ok(Self::FirstDay),
            other => Err(format!("unknown add-on day policy: {}", other)),
        }
    }
}

/// One priced add-on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnLine {
    pub add_on_id: String,
    pub unit_price: f64,
    pub occurrences: u32,
    pub line_total: f64,
}

/// Result of add-on calculation
#[derive(Debug, Clone, Default)]
pub struct AddOnCalculationResult {
    pub lines: Vec<AddOnLine>,
    pub total: Decimal,
}

/// Delivery days in a week; a trial is always a 2-day week
pub fn days_per_week(week_type: WeekType, is_trial: bool) -> u32 {
    if is_trial {
        TRIAL_DAYS
    } else {
        week_type.days_per_week()
    }
}

/// Number of delivery days an add-on is charged for
pub fn occurrences(
    selection: &DaySelection,
    duration: u32,
    days_per_week: u32,
    unset: UnsetAddOnDays,
) -> u32 {
    let per_week = |k: u32| {
        let weeks = duration.div_ceil(days_per_week.max(1));
        duration.min(weeks.saturating_mul(k))
    };

    match selection {
        DaySelection::AllDays => duration,
        DaySelection::SpecificDays(days) => per_week(days.len() as u32),
        DaySelection::Unset => match unset {
            UnsetAddOnDays::AllDays => duration,
            UnsetAddOnDays::FirstDay => per_week(1),
        },
    }
}

/// Price every selected add-on over `duration` delivery days
pub fn calculate_add_ons(
    add_ons: &[SelectedAddOn],
    duration: u32,
    days_per_week: u32,
    unset: UnsetAddOnDays,
) -> AddOnCalculationResult {
    let mut result = AddOnCalculationResult::default();

    for selected in add_ons {
        let unit_price = non_negative(selected.add_on.price);
        let count = occurrences(&selected.days, duration, days_per_week, unset);
        let line_total = unit_price.saturating_mul(Decimal::from(count));

        result.total = result.total.saturating_add(line_total);
        result.lines.push(AddOnLine {
            add_on_id: selected.add_on.id.clone(),
            unit_price: to_f64(unit_price),
            occurrences: count,
            line_total: to_f64(line_total),
        });
    }

    result
}
