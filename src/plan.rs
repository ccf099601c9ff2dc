use bon::bon;
use chrono::TimeZone;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    charging::ChargingDetails,
    error::Result,
    quantity::{KilowattHours, Kilometers, Kilowatts, Percentage},
    schedule::{FinishTime, Timestamp, charging_start_time_in},
    state::{Reading, RemainingState},
};

/// Per-vehicle constants.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    /// Range with the fully charged battery.
    pub max_range: Kilometers,

    pub battery_capacity: KilowattHours,

    /// Maximum charging rate, in kilowatt-hours per hour.
    pub charging_rate: Kilowatts,
}

/// End-to-end charging plan: what is left, what is needed, and when to start.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChargingPlan {
    pub state: RemainingState,
    pub details: ChargingDetails,
    pub start: Timestamp,
    pub finish: Timestamp,
}

#[bon]
impl ChargingPlan {
    /// Plan the charging, interpreting calendar dates in the given time zone.
    ///
    /// Pass [`chrono::Local`] to use the local time zone.
    #[builder]
    #[instrument(skip_all)]
    pub fn new<Tz: TimeZone>(
        #[builder(finish_fn)] time_zone: Tz,
        vehicle: Vehicle,
        #[builder(into, default = Reading::Absent)] remaining_km: Reading<Kilometers>,
        #[builder(into, default = Reading::Absent)] remaining_percentage: Reading<Percentage>,
        #[builder(into)] finish: FinishTime,
    ) -> Result<Self> {
        let state = RemainingState::reconcile(remaining_km, remaining_percentage, vehicle.max_range)?;
        let details = ChargingDetails::compute(
            state.state_of_charge,
            vehicle.battery_capacity,
            vehicle.charging_rate,
        )?;
        let finish = finish.resolve_in(&time_zone)?;
        let start =
            charging_start_time_in(details.duration, FinishTime::Timestamp(finish), &time_zone)?;
        debug!(?state, ?details, start, finish, "planned");
        Ok(Self { state, details, start, finish })
    }
}
