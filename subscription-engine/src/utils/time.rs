//! Time helpers - business timezone conversion
//!
//! Calendar dates (`NaiveDate`) are always interpreted in the business
//! timezone; instants stay in UTC.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use shared::error::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Calendar date of `now` in the business timezone
pub fn business_date(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// Today's date in the business timezone
pub fn today(tz: Tz) -> NaiveDate {
    business_date(Utc::now(), tz)
}

/// Reject dates before today (business timezone)
pub fn validate_not_past(date: NaiveDate, now: DateTime<Utc>, tz: Tz) -> AppResult<()> {
    let today = business_date(now, tz);
    if date < today {
        return Err(AppError::validation(format!(
            "Date {} is in the past (today is {})",
            date, today
        ))
        .with_detail("date", date.to_string()));
    }
    Ok(())
}
