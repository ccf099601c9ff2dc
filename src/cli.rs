use charge_planner::{
    plan::Vehicle,
    quantity::{KilowattHours, Kilometers, Kilowatts, Percentage},
    schedule::{FinishTime, TimeOfDay, Timestamp},
};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};

use crate::prelude::*;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Output format.
    #[clap(long, value_enum, default_value = "table", env = "OUTPUT_FORMAT", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile the remaining range with the state of charge.
    #[clap(name = "state")]
    State(Box<StateArgs>),

    /// Compute the energy and time needed to charge to full.
    #[clap(name = "details")]
    Details(Box<DetailsArgs>),

    /// Plan the charging end-to-end, including the start time.
    #[clap(name = "plan")]
    Plan(Box<PlanArgs>),
}

#[derive(Copy, Clone, Parser)]
pub struct VehicleArgs {
    /// Range with the fully charged battery, in kilometers.
    #[clap(long = "max-range-km", env = "MAX_RANGE_KM")]
    pub max_range: Kilometers,

    #[clap(flatten)]
    pub battery: BatteryArgs,
}

impl From<VehicleArgs> for Vehicle {
    fn from(args: VehicleArgs) -> Self {
        Self {
            max_range: args.max_range,
            battery_capacity: args.battery.capacity,
            charging_rate: args.battery.charging_rate,
        }
    }
}

#[derive(Copy, Clone, Parser)]
pub struct BatteryArgs {
    /// Battery capacity in kilowatt-hours.
    #[clap(long = "battery-capacity-kwh", env = "BATTERY_CAPACITY_KWH")]
    pub capacity: KilowattHours,

    /// Maximum charging rate in kilowatts.
    #[clap(long = "charging-rate-kw", env = "CHARGING_RATE_KW")]
    pub charging_rate: Kilowatts,
}

/// Remaining range and state of charge. Zeros count as not provided.
#[derive(Copy, Clone, Parser)]
pub struct RemainingArgs {
    #[clap(long = "remaining-km", env = "REMAINING_KM")]
    pub km: Option<Kilometers>,

    /// Takes precedence over the remaining kilometers.
    #[clap(long = "remaining-percentage", env = "REMAINING_PERCENTAGE")]
    pub percentage: Option<Percentage>,
}

#[derive(Parser)]
pub struct StateArgs {
    #[clap(flatten)]
    pub remaining: RemainingArgs,

    /// Range with the fully charged battery, in kilometers.
    #[clap(long = "max-range-km", env = "MAX_RANGE_KM")]
    pub max_range: Kilometers,
}

#[derive(Parser)]
pub struct DetailsArgs {
    #[clap(long = "remaining-percentage", env = "REMAINING_PERCENTAGE")]
    pub remaining_percentage: Percentage,

    #[clap(flatten)]
    pub battery: BatteryArgs,
}

#[derive(Parser)]
pub struct PlanArgs {
    #[clap(flatten)]
    pub vehicle: VehicleArgs,

    #[clap(flatten)]
    pub remaining: RemainingArgs,

    #[clap(flatten)]
    pub finish: FinishArgs,
}

#[derive(Parser)]
pub struct FinishArgs {
    /// Absolute finish time in milliseconds since the Unix epoch.
    #[clap(
        long = "finish-at",
        env = "FINISH_AT",
        conflicts_with_all = ["date", "time_of_day"],
        allow_negative_numbers = true
    )]
    pub at: Option<Timestamp>,

    /// Finish date, defaults to today.
    #[clap(long = "finish-date", env = "FINISH_DATE", requires = "time_of_day")]
    pub date: Option<NaiveDate>,

    /// Finish time of day in the local time zone, for example: `6:30`.
    #[clap(long = "finish-time", env = "FINISH_TIME")]
    pub time_of_day: Option<TimeOfDay>,
}

impl FinishArgs {
    pub fn finish_time(&self) -> Result<FinishTime> {
        if let Some(at) = self.at {
            return Ok(FinishTime::Timestamp(at));
        }
        let time_of_day =
            self.time_of_day.context("either `--finish-at` or `--finish-time` is required")?;
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        Ok(FinishTime::on_date(date, time_of_day))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_plan_with_time_of_day() {
        let args = Args::try_parse_from([
            "charge-planner",
            "plan",
            "--max-range-km",
            "400",
            "--battery-capacity-kwh",
            "60",
            "--charging-rate-kw",
            "11",
            "--remaining-percentage",
            "45",
            "--finish-date",
            "2024-06-01",
            "--finish-time",
            "6:00",
        ])
        .unwrap();
        let Command::Plan(args) = args.command else { panic!("expected the plan command") };
        assert_eq!(args.remaining.percentage, Some(Percentage(45.0)));
        assert_eq!(args.remaining.km, None);
        assert_eq!(
            args.finish.finish_time().unwrap(),
            FinishTime::on_date(
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                TimeOfDay::from_hm(6, 0).unwrap(),
            ),
        );
    }

    #[test]
    fn parse_plan_with_timestamp() {
        let args = Args::try_parse_from([
            "charge-planner",
            "--format",
            "json",
            "plan",
            "--max-range-km",
            "400",
            "--battery-capacity-kwh",
            "60",
            "--charging-rate-kw",
            "11",
            "--remaining-km",
            "120",
            "--finish-at",
            "1717218000000",
        ])
        .unwrap();
        assert!(args.format == OutputFormat::Json);
        let Command::Plan(args) = args.command else { panic!("expected the plan command") };
        assert_eq!(args.finish.finish_time().unwrap(), FinishTime::Timestamp(1_717_218_000_000));
    }

    #[test]
    fn finish_time_is_required() {
        let finish = FinishArgs { at: None, date: None, time_of_day: None };
        assert!(finish.finish_time().is_err());
    }
}
