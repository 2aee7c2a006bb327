//! Scheduling - delivery windows and the delivery calendar

pub mod delivery;
pub mod window;

pub use delivery::{NextDelivery, extend_end_date, is_excluded_day, next_delivery_date};
pub use window::{compute_end_date, count_delivery_days, delivery_dates};
