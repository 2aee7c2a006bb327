//! Decimal helpers
//!
//! Amounts are stored as `f64` and computed as `Decimal`. Every stage of a
//! calculation converts in with [`to_decimal`] and back out with [`to_f64`].
//!
//! Inputs are clamped to [`MAX_AMOUNT`] and stages combine with saturating
//! arithmetic, so a hostile draft yields a saturated summary instead of a
//! panic.

use rust_decimal::prelude::*;

/// Rounding precision for monetary values (2 decimal places)
pub const DECIMAL_PLACES: u32 = 2;

/// Largest magnitude accepted for a single amount, price or percentage
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Convert f64 to Decimal; non-finite values become zero and magnitudes
/// beyond [`MAX_AMOUNT`] are clamped
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .unwrap_or_default()
        .clamp(-MAX_AMOUNT, MAX_AMOUNT)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Convert f64 to Decimal, clamping negatives to zero
#[inline]
pub fn non_negative(value: f64) -> Decimal {
    to_decimal(value).max(Decimal::ZERO)
}

/// Round to a whole currency unit, half away from zero
#[inline]
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_two_places() {
        assert_eq!(to_f64(to_decimal(10.125)), 10.13);
        assert_eq!(to_f64(to_decimal(0.1) + to_decimal(0.2)), 0.3);
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
        assert_eq!(non_negative(-5.0), Decimal::ZERO);
    }

    #[test]
    fn test_amounts_clamped_to_ceiling() {
        assert_eq!(MAX_AMOUNT, Decimal::from(1_000_000_000_000_000u64));
        assert_eq!(to_decimal(5e28), MAX_AMOUNT);
        assert_eq!(to_decimal(-5e28), -MAX_AMOUNT);
        assert_eq!(to_decimal(1e12), Decimal::from(1_000_000_000_000u64));
    }

    #[test]
    fn test_round_whole() {
        assert_eq!(round_whole(Decimal::new(1665, 1)), Decimal::from(167));
        assert_eq!(round_whole(Decimal::new(1664, 1)), Decimal::from(166));
    }
}
