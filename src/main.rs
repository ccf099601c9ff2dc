#![allow(clippy::doc_markdown)]

mod cli;
mod prelude;
mod tables;

use charge_planner::{charging::ChargingDetails, plan::ChargingPlan, state::RemainingState};
use chrono::Local;
use clap::{Parser, crate_version};
use comfy_table::Table;
use serde::Serialize;

use crate::{
    cli::{Args, Command, OutputFormat},
    prelude::*,
    tables::{build_details_table, build_plan_table, build_state_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    debug!(version = crate_version!(), "starting…");

    let args = Args::parse();

    match args.command {
        Command::State(state_args) => {
            let state = RemainingState::reconcile(
                state_args.remaining.km.into(),
                state_args.remaining.percentage.into(),
                state_args.max_range,
            )?;
            info!(?state.range, ?state.state_of_charge, "reconciled");
            render(args.format, &state, build_state_table)?;
        }
        Command::Details(details_args) => {
            let details = ChargingDetails::compute(
                details_args.remaining_percentage,
                details_args.battery.capacity,
                details_args.battery.charging_rate,
            )?;
            info!(?details.amount, ?details.duration, "computed");
            render(args.format, &details, build_details_table)?;
        }
        Command::Plan(plan_args) => {
            let plan = ChargingPlan::builder()
                .vehicle(plan_args.vehicle.into())
                .remaining_km(plan_args.remaining.km)
                .remaining_percentage(plan_args.remaining.percentage)
                .finish(plan_args.finish.finish_time()?)
                .build(Local)
                .context("failed to plan the charging")?;
            info!(plan.start, plan.finish, "planned");
            let now = Local::now();
            render(args.format, &plan, |plan| build_plan_table(plan, now))?;
        }
    }

    Ok(())
}

fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    build_table: impl FnOnce(&T) -> Table,
) -> Result {
    match format {
        OutputFormat::Table => println!("{}", build_table(value)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
