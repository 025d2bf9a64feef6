//! Per-aircraft KPI accumulator.

/// Key performance indicators accumulated over the whole run.
///
/// Every field is monotonically non-decreasing across any sequence of
/// `update` calls; exactly one time field grows per sub-step, and over one
/// `update(dt)` the three time fields together grow by exactly `dt`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AircraftStats {
    pub flight_time_hours: f64,
    pub charge_time_hours: f64,
    pub wait_time_hours: f64,

    /// Passengers × miles flown, summed across flight sub-steps.
    pub passenger_miles: f64,

    /// Miles flown (independent of passenger count).
    pub distance_miles: f64,

    /// Faults drawn during flight sub-steps.
    pub fault_count: u32,

    /// Number of completed `update` calls, independent of how many
    /// sub-steps each one took.
    pub completed_ticks: u64,
}

impl AircraftStats {
    /// Total simulated hours accounted for across all three states.
    #[inline]
    pub fn total_hours(&self) -> f64 {
        self.flight_time_hours + self.charge_time_hours + self.wait_time_hours
    }
}
