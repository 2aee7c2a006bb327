//! Pricing Module
//!
//! Prices subscription drafts and manual admin subscriptions.
//!
//! # Components
//!
//! - [`order_calculator`]: stage-by-stage order summary
//! - [`add_on_calculator`]: add-on weighting by day selection
//! - [`promo`]: promo discount of an applied offer
//! - [`trial`]: trial pricing strategies
//! - [`plan`]: ad hoc plan factory
//! - [`manual`]: admin-created subscription totals
//! - [`money`]: f64 <-> Decimal helpers

pub mod add_on_calculator;
pub mod manual;
pub mod money;
pub mod order_calculator;
pub mod plan;
pub mod promo;
pub mod trial;

pub use add_on_calculator::{AddOnLine, UnsetAddOnDays, calculate_add_ons, days_per_week, occurrences};
pub use manual::{ManualAddOnLine, ManualMealLine, ManualTotals, calculate_manual_totals};
pub use money::{to_decimal, to_f64};
pub use order_calculator::{
    OrderPriceCalculator, OrderSummary, PricingOptions, compute_order_summary,
    compute_order_summary_at,
};
pub use plan::make_dynamic_plan;
pub use promo::calculate_promo_discount;
pub use trial::{MealBase, TRIAL_DAYS, TrialPricing, resolve_meal_base};
