//! Delivery calendar for persisted subscriptions
//!
//! Persisted records carry a [`WeekendExclusion`] rather than a week type;
//! admin edits may leave it out of sync with `week_type`, so the calendar
//! follows the stored exclusion.

use chrono::{Datelike, NaiveDate};
use shared::models::{Subscription, WeekendExclusion};

/// Whether `date` is excluded from delivery
pub fn is_excluded_day(exclusion: WeekendExclusion, date: NaiveDate) -> bool {
    exclusion.excludes(date.weekday())
}

/// The delivery date following some date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextDelivery {
    pub date: NaiveDate,
    /// The date falls after the subscription's current end date
    pub past_end: bool,
}

/// First non-excluded, non-skipped date strictly after `from`
pub fn next_delivery_date(sub: &Subscription, from: NaiveDate) -> NextDelivery {
    let date = from
        .iter_days()
        .skip(1)
        .find(|d| !is_excluded_day(sub.weekend_exclusion, *d) && !sub.is_skipped(*d))
        .unwrap_or(NaiveDate::MAX);

    NextDelivery {
        date,
        past_end: date > sub.end_date,
    }
}

/// End date pushed forward by one delivery day
///
/// Dates already skipped are not delivery days, so the window steps past them.
pub fn extend_end_date(sub: &Subscription) -> NaiveDate {
    sub.end_date
        .iter_days()
        .skip(1)
        .find(|d| !is_excluded_day(sub.weekend_exclusion, *d) && !sub.is_skipped(*d))
        .unwrap_or(sub.end_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{SubscriptionCreate, SubscriptionStatus, WeekType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_sub(exclusion: WeekendExclusion, end: NaiveDate) -> Subscription {
        SubscriptionCreate {
            user_id: "u1".into(),
            meal_id: "m1".into(),
            plan_id: "p1".into(),
            start_date: date(2024, 6, 3),
            end_date: end,
            delivery_time: None,
            week_type: WeekType::MonFri,
            weekend_exclusion: exclusion,
            exclude_weekends: exclusion.exclude_weekends(),
            address_id: "a1".into(),
            add_ons: vec![],
            total_amount: 0.0,
            paid_amount: 0.0,
            total_deliveries: 6,
            remaining_deliveries: 6,
            status: SubscriptionStatus::Active,
            special_instructions: None,
        }
        .into_subscription("sub_1".into(), 0)
    }

    #[test]
    fn test_is_excluded_day() {
        let sat = date(2024, 6, 8);
        let sun = date(2024, 6, 9);
        assert!(is_excluded_day(WeekendExclusion::Both, sat));
        assert!(is_excluded_day(WeekendExclusion::Both, sun));
        assert!(is_excluded_day(WeekendExclusion::Saturday, sat));
        assert!(!is_excluded_day(WeekendExclusion::Saturday, sun));
        assert!(!is_excluded_day(WeekendExclusion::Sunday, sat));
        assert!(!is_excluded_day(WeekendExclusion::Neither, sun));
    }

    #[test]
    fn test_next_delivery_skips_weekend() {
        let sub = make_sub(WeekendExclusion::Both, date(2024, 6, 10));
        let next = next_delivery_date(&sub, date(2024, 6, 7));
        assert_eq!(next.date, date(2024, 6, 10));
        assert!(!next.past_end);
    }

    #[test]
    fn test_next_delivery_skips_skipped_dates() {
        let mut sub = make_sub(WeekendExclusion::Both, date(2024, 6, 10));
        sub.skipped_dates.push(date(2024, 6, 10));
        let next = next_delivery_date(&sub, date(2024, 6, 7));
        assert_eq!(next.date, date(2024, 6, 11));
        assert!(next.past_end);
    }

    #[test]
    fn test_extend_end_date() {
        // Friday end, weekends excluded -> Monday
        let sub = make_sub(WeekendExclusion::Both, date(2024, 6, 7));
        assert_eq!(extend_end_date(&sub), date(2024, 6, 10));

        let sub = make_sub(WeekendExclusion::Sunday, date(2024, 6, 7));
        assert_eq!(extend_end_date(&sub), date(2024, 6, 8));
    }

    #[test]
    fn test_extend_end_date_steps_past_skipped_dates() {
        // Mon 10 end, Tue 11 skipped ahead of time -> Wed 12
        let mut sub = make_sub(WeekendExclusion::Both, date(2024, 6, 10));
        sub.skipped_dates.push(date(2024, 6, 11));
        assert_eq!(extend_end_date(&sub), date(2024, 6, 12));
    }
}
