use std::time::Duration;

use charge_planner::{
    charging::ChargingDetails,
    plan::ChargingPlan,
    quantity::{KilowattHours, Milliseconds},
    schedule::Timestamp,
    state::RemainingState,
};
use chrono::{DateTime, Local, TimeZone};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn format_duration(duration: Milliseconds) -> String {
    humantime::format_duration(Duration::from(duration)).to_string()
}

fn format_timestamp(timestamp: Timestamp) -> String {
    Local
        .timestamp_millis_opt(timestamp)
        .single()
        .map_or_else(|| format!("{timestamp} ms"), |at| at.format("%b %d %H:%M").to_string())
}

pub fn build_state_table(state: &RemainingState) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Range", "State of charge"]);
    table.add_row(vec![
        Cell::new(state.range).set_alignment(CellAlignment::Right),
        Cell::new(state.state_of_charge).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_details_table(details: &ChargingDetails) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Energy", "Duration"]);
    table.add_row(vec![
        Cell::new(format!("{:.2}", details.amount)).set_alignment(CellAlignment::Right).fg(
            if details.amount > KilowattHours::ZERO { Color::Reset } else { Color::Green },
        ),
        Cell::new(format_duration(details.duration)),
    ]);
    table
}

pub fn build_plan_table(plan: &ChargingPlan, now: DateTime<Local>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Range", "SoC", "Energy", "Duration", "Start", "Finish"]);
    table.add_row(vec![
        Cell::new(plan.state.range).set_alignment(CellAlignment::Right),
        Cell::new(plan.state.state_of_charge).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.2}", plan.details.amount)).set_alignment(CellAlignment::Right),
        Cell::new(format_duration(plan.details.duration)),
        Cell::new(format_timestamp(plan.start)).fg(if plan.start < now.timestamp_millis() {
            Color::Red
        } else {
            Color::Green
        }),
        Cell::new(format_timestamp(plan.finish)).add_attribute(Attribute::Dim),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use charge_planner::quantity::{Kilometers, Percentage};

    use super::*;

    #[test]
    fn format_duration_ok() {
        assert_eq!(format_duration(Milliseconds(10_800_000)), "3h");
        assert_eq!(format_duration(Milliseconds(-1)), "0s");
    }

    #[test]
    fn build_state_table_ok() {
        let state = RemainingState { range: Kilometers(180.0), state_of_charge: Percentage(45.0) };
        let rendered = build_state_table(&state).to_string();
        assert!(rendered.contains("180 km"), "{rendered}");
        assert!(rendered.contains("45 %"), "{rendered}");
    }
}
