//! Meal subscription engine
//!
//! Prices subscription drafts and projects their delivery windows, plus the
//! services that feed and consume those calculations.
//!
//! # Module layout
//!
//! ```text
//! subscription-engine/src/
//! ├── core/        # Configuration
//! ├── schedule/    # Delivery windows and calendar
//! ├── pricing/     # Order summary, add-ons, promo, trial strategies
//! ├── db/          # Repository traits and in-memory implementations
//! ├── services/    # Checkout, offers, wallet, day-level operations
//! └── utils/       # Logging, time helpers
//! ```
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use shared::models::{Meal, Plan, SubscriptionDraft, WeekType};
//! use subscription_engine::{compute_end_date, compute_order_summary};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
//! let plan = Plan {
//!     id: "p6".into(),
//!     name: "6 Day Plan".into(),
//!     duration: 6,
//!     original_price: 1200.0,
//!     discounted_price: 1000.0,
//!     discount_percent: 0.0,
//! };
//! let draft = SubscriptionDraft::new(start)
//!     .with_meal(Meal::new("m1", "Thali", 200.0))
//!     .with_plan(plan)
//!     .with_week_type(WeekType::MonFri);
//!
//! let summary = compute_order_summary(&draft);
//! assert_eq!(summary.payable_amount, 1000.0);
//! assert_eq!(summary.discount, 200.0);
//!
//! let end = compute_end_date(start, summary.duration, draft.week_type);
//! assert_eq!(end, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
//! ```

pub mod core;
pub mod db;
pub mod pricing;
pub mod schedule;
pub mod services;
pub mod utils;

// Re-export public API
pub use crate::core::Config;
pub use pricing::{
    OrderPriceCalculator, OrderSummary, PricingOptions, TrialPricing, UnsetAddOnDays,
    compute_order_summary, compute_order_summary_at, make_dynamic_plan,
};
pub use schedule::compute_end_date;
pub use shared::error::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
