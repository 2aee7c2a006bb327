//! Plan factory

use rust_decimal::prelude::*;
use shared::models::Plan;

use super::money::{non_negative, to_f64};

/// Build an ad hoc plan of `duration_days` days at `meal_price` per day
///
/// Used when the customer picks a day count instead of a catalog plan. The
/// plan carries no discount.
pub fn make_dynamic_plan(duration_days: u32, meal_price: f64) -> Plan {
    let price = to_f64(non_negative(meal_price) * Decimal::from(duration_days));
    Plan {
        id: format!("dynamic-{}", duration_days),
        name: format!("{} Day Plan", duration_days),
        duration: duration_days,
        original_price: price,
        discounted_price: price,
        discount_percent: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_dynamic_plan() {
        let plan = make_dynamic_plan(12, 149.5);
        assert_eq!(plan.id, "dynamic-12");
        assert_eq!(plan.name, "12 Day Plan");
        assert_eq!(plan.duration, 12);
        assert_eq!(plan.original_price, 1794.0);
        assert_eq!(plan.discounted_price, 1794.0);
        assert_eq!(plan.discount_percent, 0.0);
    }
}
