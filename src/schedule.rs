//! Resolving when charging has to start in order to finish on time.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use chrono::{Local, MappedLocalTime, NaiveDate, NaiveTime, TimeZone};
use serde::Serialize;
use tracing::debug;

use crate::{
    error::{Error, Result},
    quantity::Milliseconds,
};

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// Wall-clock time of day with minute precision, written as `H:MM` in 24-hour clock.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub const fn as_naive_time(self) -> NaiveTime {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidTimeOfDay(s.to_owned());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if !(1..=2).contains(&hour.len()) || minute.len() != 2 {
            return Err(invalid());
        }
        if !hour.chars().chain(minute.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let hour = hour.parse().map_err(|_| invalid())?;
        let minute = minute.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%-H:%M"))
    }
}

impl From<TimeOfDay> for String {
    fn from(time_of_day: TimeOfDay) -> Self {
        time_of_day.to_string()
    }
}

/// When charging must be complete.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FinishTime {
    /// Absolute point in time.
    Timestamp(Timestamp),

    /// Time of day on the given calendar date, in the resolver's time zone.
    OnDate { date: NaiveDate, time_of_day: TimeOfDay },
}

impl From<Timestamp> for FinishTime {
    fn from(timestamp: Timestamp) -> Self {
        Self::Timestamp(timestamp)
    }
}

impl FinishTime {
    pub const fn on_date(date: NaiveDate, time_of_day: TimeOfDay) -> Self {
        Self::OnDate { date, time_of_day }
    }

    /// Resolve into an absolute timestamp.
    ///
    /// Ambiguous local times (daylight saving fold) resolve to the earliest instant.
    pub fn resolve_in<Tz: TimeZone>(self, time_zone: &Tz) -> Result<Timestamp> {
        match self {
            Self::Timestamp(timestamp) => Ok(timestamp),
            Self::OnDate { date, time_of_day } => {
                let naive = date.and_time(time_of_day.as_naive_time());
                let finish = match time_zone.from_local_datetime(&naive) {
                    MappedLocalTime::Single(finish) => finish,
                    MappedLocalTime::Ambiguous(first, second) => first.min(second),
                    MappedLocalTime::None => return Err(Error::NonexistentLocalTime(naive)),
                };
                Ok(finish.timestamp_millis())
            }
        }
    }
}

/// Point in time when charging must start, interpreting dates in the local time zone.
///
/// The result may lie in the past: that is for the caller to deal with.
pub fn charging_start_time(duration: Milliseconds, finish: FinishTime) -> Result<Timestamp> {
    charging_start_time_in(duration, finish, &Local)
}

/// Same as [`charging_start_time`], but in the explicit time zone.
pub fn charging_start_time_in<Tz: TimeZone>(
    duration: Milliseconds,
    finish: FinishTime,
    time_zone: &Tz,
) -> Result<Timestamp> {
    let finish = finish.resolve_in(time_zone)?;
    let start = finish.saturating_sub(duration.0);
    debug!(finish, start, ?duration, "resolved the charging start time");
    Ok(start)
}
