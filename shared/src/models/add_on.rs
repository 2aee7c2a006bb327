//! Add-on Model

use super::week_type::DayKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Add-on category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddOnCategory {
    Snack,
    Dessert,
    Beverage,
    #[default]
    Extra,
}

/// Add-on entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Price per delivery
    pub price: f64,
    #[serde(default)]
    pub category: AddOnCategory,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl AddOn {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: AddOnCategory::default(),
            is_active: true,
        }
    }
}

/// Which delivery days an add-on applies to
///
/// Serialized as `"all"`, an array of day keys, or `null`/absent for
/// [`DaySelection::Unset`]. An empty array is read as `Unset`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<DaySelectionRepr>", into = "Option<DaySelectionRepr>")]
pub enum DaySelection {
    /// Every delivery day of the plan
    AllDays,
    /// Only the given weekdays (never empty)
    SpecificDays(BTreeSet<DayKey>),
    /// The customer made no choice
    #[default]
    Unset,
}

impl DaySelection {
    /// Build a selection from day keys; an empty list yields `Unset`
    pub fn days<I: IntoIterator<Item = DayKey>>(days: I) -> Self {
        let set: BTreeSet<DayKey> = days.into_iter().collect();
        if set.is_empty() {
            Self::Unset
        } else {
            Self::SpecificDays(set)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
#[doc(hidden)]
pub enum DaySelectionRepr {
    Keyword(String),
    Days(Vec<DayKey>),
}

impl TryFrom<Option<DaySelectionRepr>> for DaySelection {
    type Error = String;

    fn try_from(value: Option<DaySelectionRepr>) -> Result<Self, Self::Error> {
        match value {
            None => Ok(Self::Unset),
            Some(DaySelectionRepr::Keyword(k)) if k.eq_ignore_ascii_case("all") => {
                Ok(Self::AllDays)
            }
            Some(DaySelectionRepr::Keyword(k)) => {
                Err(format!("expected \"all\" or a list of days, got \"{}\"", k))
            }
            Some(DaySelectionRepr::Days(days)) => Ok(Self::days(days)),
        }
    }
}

impl From<DaySelection> for Option<DaySelectionRepr> {
    fn from(value: DaySelection) -> Self {
        match value {
            DaySelection::AllDays => Some(DaySelectionRepr::Keyword("all".to_string())),
            DaySelection::SpecificDays(days) => {
                Some(DaySelectionRepr::Days(days.into_iter().collect()))
            }
            DaySelection::Unset => None,
        }
    }
}

/// An add-on picked for a subscription draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedAddOn {
    pub add_on: AddOn,
    #[serde(default)]
    pub days: DaySelection,
}

impl SelectedAddOn {
    pub fn new(add_on: AddOn, days: DaySelection) -> Self {
        Self { add_on, days }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_empty_is_unset() {
        assert_eq!(DaySelection::days(Vec::<DayKey>::new()), DaySelection::Unset);
        assert_eq!(
            DaySelection::days([DayKey::Wed, DayKey::Mon, DayKey::Wed]),
            DaySelection::SpecificDays(BTreeSet::from([DayKey::Mon, DayKey::Wed]))
        );
    }

    #[test]
    fn test_selection_deserialize() {
        let all: SelectedAddOn =
            serde_json::from_str(r#"{"addOn":{"id":"a1","price":40},"days":"all"}"#).unwrap();
        assert_eq!(all.days, DaySelection::AllDays);

        let some: SelectedAddOn =
            serde_json::from_str(r#"{"addOn":{"id":"a1","price":40},"days":["mon","fri"]}"#)
                .unwrap();
        assert_eq!(some.days, DaySelection::days([DayKey::Mon, DayKey::Fri]));

        let empty: SelectedAddOn =
            serde_json::from_str(r#"{"addOn":{"id":"a1","price":40},"days":[]}"#).unwrap();
        assert_eq!(empty.days, DaySelection::Unset);

        let missing: SelectedAddOn =
            serde_json::from_str(r#"{"addOn":{"id":"a1","price":40}}"#).unwrap();
        assert_eq!(missing.days, DaySelection::Unset);

        let bad = serde_json::from_str::<SelectedAddOn>(
            r#"{"addOn":{"id":"a1","price":40},"days":"weekends"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_selection_serialize() {
        assert_eq!(serde_json::to_string(&DaySelection::AllDays).unwrap(), "\"all\"");
        assert_eq!(serde_json::to_string(&DaySelection::Unset).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&DaySelection::days([DayKey::Tue])).unwrap(),
            "[\"tue\"]"
        );
    }
}
