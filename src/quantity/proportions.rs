quantity!(Percentage, f64, "%");

impl Percentage {
    /// Fully charged battery.
    pub const FULL: Self = Self(100.0);

    /// Convert to a plain proportion, where `100%` is `1.0`.
    ///
    /// The value is not clamped, so `150%` gives `1.5`.
    #[must_use]
    pub const fn to_proportion(self) -> f64 {
        self.0 / 100.0
    }

    #[must_use]
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn full_minus_percentage_ok() {
        assert_eq!(Percentage::FULL - Percentage(30.0), Percentage(70.0));
    }

    #[test]
    fn to_proportion_is_not_clamped() {
        assert_abs_diff_eq!(Percentage(150.0).to_proportion(), 1.5);
        assert_abs_diff_eq!(Percentage(-50.0).to_proportion(), -0.5);
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(Percentage(32.5).round(), Percentage(33.0));
        assert_eq!(Percentage(-32.5).round(), Percentage(-33.0));
    }
}
