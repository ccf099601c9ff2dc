//! Reconciling the remaining range with the state of charge.

use serde::Serialize;
use tracing::trace;

use crate::{
    convert::{km_to_percentage, percentage_to_km},
    error::{Error, Result},
    quantity::{Kilometers, Percentage, Significant},
};

/// Possibly missing input reading.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reading<T> {
    Provided(T),
    Absent,
}

impl<T: Significant> Reading<T> {
    /// Accept the raw reading only if it is significant.
    ///
    /// Zero and `NaN` are treated as absent here, even though they are valid elsewhere.
    pub fn from_raw(value: Option<T>) -> Self {
        match value {
            Some(value) if value.is_significant() => Self::Provided(value),
            _ => Self::Absent,
        }
    }
}

impl<T: Significant> From<Option<T>> for Reading<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_raw(value)
    }
}

/// Reconciled remaining range and state of charge.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RemainingState {
    pub range: Kilometers,
    pub state_of_charge: Percentage,
}

impl RemainingState {
    /// Bring the remaining range and the state of charge in line with each other.
    ///
    /// The state of charge is the source of truth: when it is provided, the remaining range
    /// is derived from it and any provided range is discarded. The state of charge is then
    /// recomputed from the derived range, so both values are whole numbers.
    ///
    /// Only when the state of charge is absent, the provided range is used as-is, without
    /// rounding, and the state of charge is derived from it.
    pub fn reconcile(
        remaining_km: Reading<Kilometers>,
        remaining_percentage: Reading<Percentage>,
        max_range: Kilometers,
    ) -> Result<Self> {
        let range = match (remaining_km, remaining_percentage) {
            (Reading::Absent, Reading::Absent) => return Err(Error::MissingInput),
            (discarded, Reading::Provided(percentage)) => {
                if let Reading::Provided(discarded) = discarded {
                    trace!(?discarded, "discarding the provided range in favour of the percentage");
                }
                percentage_to_km(percentage, max_range)
            }
            (Reading::Provided(range), Reading::Absent) => range,
        };
        let state_of_charge = km_to_percentage(range, max_range);
        trace!(?range, ?state_of_charge, "reconciled the remaining state");
        Ok(Self { range, state_of_charge })
    }
}
