use std::time::Duration;

use chrono::TimeDelta;

quantity!(Hours, f64, "h");

impl Hours {
    const SECONDS_PER_HOUR: f64 = 3600.0;
    const MILLIS_PER_SECOND: f64 = 1000.0;

    /// Convert to whole milliseconds, rounding to the nearest one.
    ///
    /// Non-finite hours saturate: `NaN` gives zero and infinities give the `i64` bounds.
    #[expect(clippy::cast_possible_truncation)]
    pub fn to_milliseconds(self) -> Milliseconds {
        let seconds = self.0 * Self::SECONDS_PER_HOUR;
        Milliseconds((seconds * Self::MILLIS_PER_SECOND).round() as i64)
    }
}

quantity!(Milliseconds, i64, "ms");

impl Milliseconds {
    pub const ONE_HOUR: Self = Self(3_600_000);
}

impl From<Milliseconds> for TimeDelta {
    fn from(milliseconds: Milliseconds) -> Self {
        Self::try_milliseconds(milliseconds.0)
            .unwrap_or(if milliseconds.0 < 0 { Self::MIN } else { Self::MAX })
    }
}

impl From<Milliseconds> for Duration {
    /// Negative durations clamp to zero.
    #[expect(clippy::cast_sign_loss)]
    fn from(milliseconds: Milliseconds) -> Self {
        Self::from_millis(milliseconds.0.max(0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_milliseconds_ok() {
        assert_eq!(Hours(1.0).to_milliseconds(), Milliseconds::ONE_HOUR);
        assert_eq!(Hours(2.0).to_milliseconds(), Milliseconds(7_200_000));
    }

    #[test]
    fn to_milliseconds_rounds_to_nearest() {
        // A third of an hour is not exactly representable.
        assert_eq!(Hours(1.0 / 3.0).to_milliseconds(), Milliseconds(1_200_000));
    }

    #[test]
    fn to_milliseconds_nan_is_zero() {
        assert_eq!(Hours(f64::NAN).to_milliseconds(), Milliseconds::ZERO);
    }

    #[test]
    fn into_duration_clamps_negative() {
        assert_eq!(Duration::from(Milliseconds(-5)), Duration::ZERO);
        assert_eq!(Duration::from(Milliseconds(1500)), Duration::from_millis(1500));
    }

    #[test]
    fn into_time_delta_ok() {
        assert_eq!(TimeDelta::from(Milliseconds::ONE_HOUR), TimeDelta::hours(1));
    }
}
