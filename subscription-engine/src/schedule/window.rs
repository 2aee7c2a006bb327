//! Delivery window projection
//!
//! A window starts on a calendar date and covers a fixed number of delivery
//! days. Which weekdays are delivery days is decided by [`WeekType`].

use chrono::{Datelike, NaiveDate};
use shared::models::WeekType;

/// Compute the last calendar date of a delivery window
///
/// Returns the smallest date `end >= start` such that `[start, end]` holds
/// exactly `duration_days` delivery days under `week_type`. A duration of 0
/// is treated as 1.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shared::models::WeekType;
/// use subscription_engine::schedule::compute_end_date;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let end = compute_end_date(monday, 6, WeekType::MonFri);
/// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
/// ```
pub fn compute_end_date(start: NaiveDate, duration_days: u32, week_type: WeekType) -> NaiveDate {
    let target = duration_days.max(1);
    let mut cursor = start;
    let mut served = 0u32;

    loop {
        if week_type.is_delivery_day(cursor.weekday()) {
            served += 1;
            if served == target {
                return cursor;
            }
        }
        // Saturates at NaiveDate::MAX
        match cursor.succ_opt() {
            Some(next) => cursor = next,
            None => return cursor,
        }
    }
}

/// Count delivery days in the inclusive range `[start, end]`
pub fn count_delivery_days(start: NaiveDate, end: NaiveDate, week_type: WeekType) -> u32 {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| week_type.is_delivery_day(d.weekday()))
        .count() as u32
}

/// The first `duration_days` delivery dates starting at `start`
pub fn delivery_dates(start: NaiveDate, duration_days: u32, week_type: WeekType) -> Vec<NaiveDate> {
    start
        .iter_days()
        .filter(|d| week_type.is_delivery_day(d.weekday()))
        .take(duration_days.max(1) as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_mon_fri_six_days_from_monday() {
        // Mon 3 .. Fri 7 = 5, then Mon 10 = 6
        let end = compute_end_date(date(2024, 6, 3), 6, WeekType::MonFri);
        assert_eq!(end, date(2024, 6, 10));
        assert_eq!(end.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_single_day_on_delivery_day_is_start() {
        let start = date(2024, 6, 5);
        for wt in [WeekType::MonFri, WeekType::MonSat, WeekType::Everyday, WeekType::Unspecified] {
            assert_eq!(compute_end_date(start, 1, wt), start);
        }
    }

    #[test]
    fn test_start_on_weekend_rolls_forward() {
        // Saturday start, mon-fri: first delivery is Monday
        let saturday = date(2024, 6, 8);
        assert_eq!(compute_end_date(saturday, 1, WeekType::MonFri), date(2024, 6, 10));
        // mon-sat counts the Saturday itself
        assert_eq!(compute_end_date(saturday, 1, WeekType::MonSat), saturday);
        // Sunday start, mon-sat: first delivery is Monday
        assert_eq!(compute_end_date(date(2024, 6, 9), 1, WeekType::MonSat), date(2024, 6, 10));
    }

    #[test]
    fn test_everyday_and_none_are_identical() {
        let start = date(2024, 2, 26);
        for n in 1..40 {
            let a = compute_end_date(start, n, WeekType::Everyday);
            let b = compute_end_date(start, n, WeekType::Unspecified);
            assert_eq!(a, b);
            assert_eq!((a - start).num_days(), i64::from(n) - 1);
        }
    }

    #[test]
    fn test_mon_sat_thirty_days() {
        // 30 delivery days at 6/week = 5 weeks minus the last Sunday
        let end = compute_end_date(date(2024, 6, 3), 30, WeekType::MonSat);
        assert_eq!(end, date(2024, 7, 6));
        assert_eq!(count_delivery_days(date(2024, 6, 3), end, WeekType::MonSat), 30);
    }

    #[test]
    fn test_zero_duration_clamps_to_one() {
        let start = date(2024, 6, 3);
        assert_eq!(compute_end_date(start, 0, WeekType::MonFri), start);
    }

    #[test]
    fn test_crosses_leap_day() {
        let end = compute_end_date(date(2024, 2, 28), 3, WeekType::Everyday);
        assert_eq!(end, date(2024, 3, 1));
    }

    #[test]
    fn test_delivery_dates_match_end_date() {
        let start = date(2024, 6, 6);
        let dates = delivery_dates(start, 7, WeekType::MonFri);
        assert_eq!(dates.len(), 7);
        assert_eq!(dates.last().copied(), Some(compute_end_date(start, 7, WeekType::MonFri)));
        assert!(dates.iter().all(|d| d.weekday().num_days_from_monday() < 5));
    }

    #[test]
    fn test_count_empty_range() {
        assert_eq!(count_delivery_days(date(2024, 6, 5), date(2024, 6, 4), WeekType::Everyday), 0);
    }
}
