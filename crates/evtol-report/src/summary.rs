//! Per-vehicle rows and per-manufacturer aggregates.

use evtol_aircraft::Aircraft;
use evtol_core::{AircraftId, Manufacturer};

/// Final state of one aircraft, snapshotted for the per-vehicle table.
#[derive(Clone, Debug)]
pub struct VehicleRow {
    pub id: AircraftId,
    pub kind: Manufacturer,
    pub flight_time_hours: f64,
    pub wait_time_hours: f64,
    pub charge_time_hours: f64,
    pub distance_miles: f64,
    pub battery_kwh: f64,
    pub completed_ticks: u64,
}

/// Aggregate KPIs for all aircraft of one manufacturer.
///
/// Fault count is the **maximum** across the group, not the mean; that is
/// the report contract.
#[derive(Clone, Debug, PartialEq)]
pub struct ManufacturerSummary {
    pub kind: Manufacturer,
    pub quantity: usize,
    pub avg_flight_time_hours: f64,
    pub avg_wait_time_hours: f64,
    pub avg_charge_time_hours: f64,
    pub max_faults: u32,
    pub total_passenger_miles: f64,
    pub avg_completed_ticks: f64,
}

/// The complete end-of-run report: one row per vehicle plus one summary
/// per manufacturer present in the fleet, in catalog order.
#[derive(Clone, Debug)]
pub struct FleetReport {
    pub vehicles: Vec<VehicleRow>,
    pub summaries: Vec<ManufacturerSummary>,
}

impl FleetReport {
    /// Snapshot `fleet` into a report.  Call only after the driver has
    /// joined all workers; each aircraft is read exactly once.
    pub fn from_fleet(fleet: &[Aircraft]) -> Self {
        let vehicles: Vec<VehicleRow> = fleet
            .iter()
            .map(|ac| {
                let stats = ac.stats();
                VehicleRow {
                    id: ac.id(),
                    kind: ac.kind(),
                    flight_time_hours: stats.flight_time_hours,
                    wait_time_hours: stats.wait_time_hours,
                    charge_time_hours: stats.charge_time_hours,
                    distance_miles: stats.distance_miles,
                    battery_kwh: ac.battery_kwh(),
                    completed_ticks: stats.completed_ticks,
                }
            })
            .collect();

        let summaries = Manufacturer::ALL
            .iter()
            .filter_map(|&kind| summarize_group(fleet, kind))
            .collect();

        Self { vehicles, summaries }
    }
}

/// Aggregate one manufacturer's group, or `None` if the fleet has no
/// aircraft of that kind.
fn summarize_group(fleet: &[Aircraft], kind: Manufacturer) -> Option<ManufacturerSummary> {
    let group: Vec<&Aircraft> = fleet.iter().filter(|ac| ac.kind() == kind).collect();
    if group.is_empty() {
        return None;
    }

    let n = group.len() as f64;
    let mut summary = ManufacturerSummary {
        kind,
        quantity: group.len(),
        avg_flight_time_hours: 0.0,
        avg_wait_time_hours: 0.0,
        avg_charge_time_hours: 0.0,
        max_faults: 0,
        total_passenger_miles: 0.0,
        avg_completed_ticks: 0.0,
    };

    for ac in &group {
        let stats = ac.stats();
        summary.avg_flight_time_hours += stats.flight_time_hours;
        summary.avg_wait_time_hours += stats.wait_time_hours;
        summary.avg_charge_time_hours += stats.charge_time_hours;
        summary.max_faults = summary.max_faults.max(stats.fault_count);
        summary.total_passenger_miles += stats.passenger_miles;
        summary.avg_completed_ticks += stats.completed_ticks as f64;
    }

    summary.avg_flight_time_hours /= n;
    summary.avg_wait_time_hours /= n;
    summary.avg_charge_time_hours /= n;
    summary.avg_completed_ticks /= n;

    Some(summary)
}
