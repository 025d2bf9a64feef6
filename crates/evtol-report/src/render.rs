//! Fixed-width console tables.

use std::fmt::Write;

use crate::FleetReport;

/// Render the per-vehicle final-state table.
pub fn render_vehicle_table(report: &FleetReport) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "{:<6} {:<9} {:>9} {:>8} {:>9} {:>10} {:>9} {:>7}",
        "Id", "Type", "FlightH", "WaitH", "ChargeH", "Miles", "BattkWh", "Ticks"
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(74)).unwrap();

    for row in &report.vehicles {
        writeln!(
            out,
            "{:<6} {:<9} {:>9.3} {:>8.3} {:>9.3} {:>10.1} {:>9.1} {:>7}",
            row.id.to_string(),
            row.kind.name(),
            row.flight_time_hours,
            row.wait_time_hours,
            row.charge_time_hours,
            row.distance_miles,
            row.battery_kwh,
            row.completed_ticks,
        )
        .unwrap();
    }

    out
}

/// Render the per-manufacturer summary table.
pub fn render_summary_table(report: &FleetReport) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "{:<9} {:>4} {:>10} {:>9} {:>10} {:>9} {:>12} {:>9}",
        "Type", "Qty", "AvgFlight", "AvgWait", "AvgCharge", "MaxFault", "PaxMiles", "AvgTicks"
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(79)).unwrap();

    for s in &report.summaries {
        writeln!(
            out,
            "{:<9} {:>4} {:>10.3} {:>9.3} {:>10.3} {:>9} {:>12.1} {:>9.1}",
            s.kind.name(),
            s.quantity,
            s.avg_flight_time_hours,
            s.avg_wait_time_hours,
            s.avg_charge_time_hours,
            s.max_faults,
            s.total_passenger_miles,
            s.avg_completed_ticks,
        )
        .unwrap();
    }

    out
}
