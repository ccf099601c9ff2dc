use serde::Serialize;
use tracing::trace;

use crate::{
    convert::{current_percentage_as_missing_kwh, percentage_to_full},
    error::{Error, Result},
    quantity::{KilowattHours, Kilowatts, Milliseconds, Percentage},
};

/// Time needed to charge the energy at the given rate, rounded to the nearest millisecond.
///
/// The charging rate must be strictly positive.
pub fn charging_milliseconds(energy: KilowattHours, rate: Kilowatts) -> Result<Milliseconds> {
    if rate.0.is_nan() || rate.0 <= 0.0 {
        return Err(Error::InvalidRate);
    }
    if energy == KilowattHours::ZERO {
        return Ok(Milliseconds::ZERO);
    }
    Ok((energy / rate).to_milliseconds())
}

/// Energy and time needed to charge the battery to full.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChargingDetails {
    pub amount: KilowattHours,
    pub duration: Milliseconds,
}

impl ChargingDetails {
    /// Compute the charging details from the current state of charge.
    pub fn compute(
        remaining: Percentage,
        battery_capacity: KilowattHours,
        charging_rate: Kilowatts,
    ) -> Result<Self> {
        let to_full = percentage_to_full(remaining);
        let amount = current_percentage_as_missing_kwh(to_full, battery_capacity);
        let duration = charging_milliseconds(amount, charging_rate)?;
        trace!(?remaining, ?to_full, ?amount, ?duration, "computed charging details");
        Ok(Self { amount, duration })
    }
}
