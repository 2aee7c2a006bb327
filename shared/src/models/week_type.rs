//! Delivery week policies
//!
//! `WeekType` is what the customer picks; `WeekendExclusion` is what gets
//! stored on the subscription and read by the delivery calendar. The latter
//! is always derived from the former through [`WeekType::weekend_exclusion`].

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which calendar weekdays count as delivery days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeekType {
    #[default]
    #[serde(rename = "mon-fri")]
    MonFri,
    #[serde(rename = "mon-sat")]
    MonSat,
    #[serde(rename = "everyday")]
    Everyday,
    /// Legacy value, treated exactly like `Everyday`
    #[serde(rename = "none")]
    Unspecified,
}

impl WeekType {
    /// Whether `weekday` is a delivery day under this policy
    pub fn is_delivery_day(self, weekday: Weekday) -> bool {
        match self {
            Self::MonFri => !matches!(weekday, Weekday::Sat | Weekday::Sun),
            Self::MonSat => weekday != Weekday::Sun,
            Self::Everyday | Self::Unspecified => true,
        }
    }

    /// Number of delivery days in a full calendar week
    pub fn days_per_week(self) -> u32 {
        match self {
            Self::MonFri => 5,
            Self::MonSat => 6,
            Self::Everyday | Self::Unspecified => 7,
        }
    }

    /// Delivery days of this policy, Monday first
    pub fn delivery_days(self) -> &'static [DayKey] {
        &DayKey::ALL[..self.days_per_week() as usize]
    }

    /// The stored weekend exclusion for this policy
    pub fn weekend_exclusion(self) -> WeekendExclusion {
        match self {
            Self::MonFri => WeekendExclusion::Both,
            Self::MonSat => WeekendExclusion::Sunday,
            Self::Everyday | Self::Unspecified => WeekendExclusion::Neither,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MonFri => "mon-fri",
            Self::MonSat => "mon-sat",
            Self::Everyday => "everyday",
            Self::Unspecified => "none",
        }
    }
}

impl fmt::Display for WeekType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mon-fri" => Ok(Self::MonFri),
            "mon-sat" => Ok(Self::MonSat),
            "everyday" => Ok(Self::Everyday),
            "none" => Ok(Self::Unspecified),
            other => Err(format!("unknown week type: {}", other)),
        }
    }
}

/// Weekend days excluded from delivery on a persisted subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekendExclusion {
    #[default]
    #[serde(rename = "none")]
    Neither,
    Saturday,
    Sunday,
    Both,
}

impl WeekendExclusion {
    /// Whether deliveries are skipped on `weekday`
    pub fn excludes(self, weekday: Weekday) -> bool {
        match self {
            Self::Neither => false,
            Self::Saturday => weekday == Weekday::Sat,
            Self::Sunday => weekday == Weekday::Sun,
            Self::Both => matches!(weekday, Weekday::Sat | Weekday::Sun),
        }
    }

    /// Legacy boolean flag stored next to the exclusion
    pub fn exclude_weekends(self) -> bool {
        self != Self::Neither
    }
}

/// Weekday key used by add-on day selections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayKey {
    pub const ALL: [DayKey; 7] = [
        DayKey::Mon,
        DayKey::Tue,
        DayKey::Wed,
        DayKey::Thu,
        DayKey::Fri,
        DayKey::Sat,
        DayKey::Sun,
    ];

    pub fn weekday(self) -> Weekday {
        match self {
            Self::Mon => Weekday::Mon,
            Self::Tue => Weekday::Tue,
            Self::Wed => Weekday::Wed,
            Self::Thu => Weekday::Thu,
            Self::Fri => Weekday::Fri,
            Self::Sat => Weekday::Sat,
            Self::Sun => Weekday::Sun,
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_monday() as usize]
    }
}
