//! Conversions between remaining range, state of charge, and energy.
//!
//! Nothing here is clamped or validated: out-of-range percentages and zero maximums
//! produce the literal arithmetic result, including infinities and `NaN`.
//! Rounding is half away from zero.

use crate::quantity::{KilowattHours, Kilometers, Percentage};

/// Express the remaining range as a whole percentage of the maximum range.
///
/// Zero maximum range yields `+∞` for a positive range, and `NaN` for zero range.
pub fn km_to_percentage(km: Kilometers, max_range: Kilometers) -> Percentage {
    Percentage(km.0 / max_range.0 * 100.0).round()
}

/// Express the state of charge as whole kilometers of the maximum range.
pub fn percentage_to_km(percentage: Percentage, max_range: Kilometers) -> Kilometers {
    Kilometers(max_range.0 * percentage.0 / 100.0).round()
}

/// Percentage points left until the battery is full.
pub fn percentage_to_full(percentage: Percentage) -> Percentage {
    Percentage::FULL - percentage
}

/// Energy corresponding to the percentage of the battery capacity, not rounded.
///
/// Named after its main use: the missing percentage points give the energy to charge.
pub fn current_percentage_as_missing_kwh(
    percentage: Percentage,
    max_capacity: KilowattHours,
) -> KilowattHours {
    max_capacity * percentage
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn km_to_percentage_ok() {
        assert_eq!(km_to_percentage(Kilometers(50.0), Kilometers(100.0)), Percentage(50.0));
    }

    #[test]
    fn km_to_percentage_rounds() {
        assert_eq!(km_to_percentage(Kilometers(33.33), Kilometers(100.0)), Percentage(33.0));
        assert_eq!(km_to_percentage(Kilometers(66.67), Kilometers(100.0)), Percentage(67.0));
    }

    #[test]
    fn km_to_percentage_zero_max_range() {
        assert_eq!(km_to_percentage(Kilometers(50.0), Kilometers::ZERO).0, f64::INFINITY);
        assert!(km_to_percentage(Kilometers::ZERO, Kilometers::ZERO).0.is_nan());
    }

    #[test]
    fn km_to_percentage_is_not_clamped() {
        assert_eq!(km_to_percentage(Kilometers(150.0), Kilometers(100.0)), Percentage(150.0));
    }

    #[test]
    fn percentage_to_km_ok() {
        assert_eq!(percentage_to_km(Percentage(50.0), Kilometers(200.0)), Kilometers(100.0));
        assert_eq!(percentage_to_km(Percentage(33.0), Kilometers(415.0)), Kilometers(137.0));
    }

    #[test]
    fn percentage_to_km_zero_max_range() {
        assert_eq!(percentage_to_km(Percentage::ZERO, Kilometers::ZERO), Kilometers::ZERO);
        assert_eq!(percentage_to_km(Percentage(80.0), Kilometers::ZERO), Kilometers::ZERO);
    }

    #[test]
    fn percentage_to_full_ok() {
        assert_eq!(percentage_to_full(Percentage(35.0)), Percentage(65.0));
        assert_eq!(percentage_to_full(Percentage(-10.0)), Percentage(110.0));
        assert_eq!(percentage_to_full(Percentage(120.0)), Percentage(-20.0));
    }

    #[test]
    fn current_percentage_as_missing_kwh_ok() {
        assert_abs_diff_eq!(
            current_percentage_as_missing_kwh(Percentage(50.0), KilowattHours(200.0)).0,
            100.0,
        );
        assert_abs_diff_eq!(
            current_percentage_as_missing_kwh(Percentage(12.5), KilowattHours(77.0)).0,
            9.625,
        );
    }

    #[test]
    fn current_percentage_as_missing_kwh_zero_capacity() {
        assert_eq!(
            current_percentage_as_missing_kwh(Percentage(23.0), KilowattHours::ZERO),
            KilowattHours::ZERO,
        );
    }

    proptest! {
        #[test]
        fn km_percentage_round_trip(percentage in 0_u8..=100, max_range in 100_u16..=1000) {
            let percentage = Percentage(f64::from(percentage));
            let max_range = Kilometers(f64::from(max_range));
            let round_trip = km_to_percentage(percentage_to_km(percentage, max_range), max_range);
            prop_assert!((round_trip.0 - percentage.0).abs() <= 1.0);
        }
    }
}
