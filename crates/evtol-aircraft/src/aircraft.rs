//! The `Aircraft` entity and its precision update loop.
//!
//! # The precision loop
//!
//! A single `update(dt)` call may cross state boundaries mid-tick: a
//! battery can run dry at t = 0.7 of a 1.0-minute step, and the remaining
//! 0.3 minutes must then be spent in the successor state *within the same
//! call*.  Each state processor therefore returns the time it actually
//! consumed (≤ the time offered), and the loop keeps dispatching on the
//! current state until the whole delta is accounted for:
//!
//! ```text
//! remaining ← dt
//! while remaining > ε:
//!     consumed ← process_<state>(remaining)   // may change state
//!     remaining ← remaining − consumed
//! completed_ticks += 1
//! ```
//!
//! The Waiting → Charging transition consumes **zero** time so the charging
//! processor takes over the tick's remainder seamlessly; a positive epsilon
//! there would break the invariant that `update(dt)` accounts for exactly
//! `dt` across the three time KPIs.

use std::sync::Arc;

use evtol_charger::ChargerPool;
use evtol_core::{AircraftId, AircraftRng, Manufacturer, ManufacturerSpec};

use crate::{AircraftState, AircraftStats};

/// Sub-step remainders at or below this are treated as fully consumed.
/// Guards the loop against float round-off, not a tunable.
pub const LOOP_EPSILON_HOURS: f64 = 1e-7;

/// Battery levels within this of empty (or full) are clamped to exactly
/// empty (or full).  Numeric hygiene, not error recovery.
pub const BATTERY_EPSILON_KWH: f64 = 1e-4;

/// One eVTOL: manufacturer spec, battery, state, KPIs, and a private
/// fault-draw RNG.
///
/// Owned and mutated exclusively by its worker thread; the only shared
/// state it touches is the charger pool, through `try_acquire`/`release`.
pub struct Aircraft {
    id: AircraftId,
    kind: Manufacturer,
    spec: &'static ManufacturerSpec,
    pool: Arc<ChargerPool>,

    state: AircraftState,
    battery_kwh: f64,
    stats: AircraftStats,
    rng: AircraftRng,
}

impl Aircraft {
    /// Create an aircraft at full battery, Flying.
    pub fn new(id: AircraftId, kind: Manufacturer, pool: Arc<ChargerPool>, rng: AircraftRng) -> Self {
        let spec = kind.spec();
        Self {
            id,
            kind,
            spec,
            pool,
            state: AircraftState::Flying,
            battery_kwh: spec.battery_capacity_kwh,
            stats: AircraftStats::default(),
            rng,
        }
    }

    // ── Core simulation step ──────────────────────────────────────────────

    /// Advance this aircraft by exactly `dt_hours` of simulated time,
    /// crossing state boundaries as needed within the same call.
    ///
    /// On return the battery is within `[0, capacity]` and the three time
    /// KPIs have grown by exactly `dt_hours` in total (within float
    /// round-off).  `completed_ticks` grows by one per call regardless of
    /// sub-step count.
    pub fn update(&mut self, dt_hours: f64) {
        let mut remaining = dt_hours;

        while remaining > LOOP_EPSILON_HOURS {
            let consumed = match self.state {
                AircraftState::Flying => self.process_flying(remaining),
                AircraftState::Waiting => self.process_waiting(remaining),
                AircraftState::Charging => self.process_charging(remaining),
            };
            remaining -= consumed;
        }

        self.stats.completed_ticks += 1;
    }

    // ── State processors ──────────────────────────────────────────────────
    //
    // Each returns the time actually consumed in that state, ≤ `available`.
    // A processor may change `self.state`; the next loop iteration then
    // dispatches on the new state.

    /// Cruise until the offered time or the battery runs out, whichever
    /// comes first.
    fn process_flying(&mut self, available: f64) -> f64 {
        let power_kw = self.spec.cruise_power_kw();
        let endurance_hours = self.battery_kwh / power_kw;
        let actual = available.min(endurance_hours);

        let miles = actual * self.spec.cruise_speed_mph;
        self.stats.flight_time_hours += actual;
        self.stats.distance_miles += miles;
        self.stats.passenger_miles += miles * f64::from(self.spec.passenger_count);
        self.battery_kwh -= power_kw * actual;

        self.check_faults(actual);

        // Anything below -ε is a real negative balance, not float dust the
        // clamp is allowed to absorb.
        debug_assert!(
            self.battery_kwh >= -BATTERY_EPSILON_KWH,
            "{}: battery driven negative beyond clamping ({} kWh)",
            self.id,
            self.battery_kwh
        );
        if self.battery_kwh <= BATTERY_EPSILON_KWH {
            self.battery_kwh = 0.0;
            self.state = AircraftState::Waiting;
        }

        actual
    }

    /// Poll the shared pool.  Success consumes zero time — the charging
    /// processor must take over this tick's remainder.  Failure spends the
    /// entire remainder waiting; wait time accumulates only on failed
    /// acquire.
    fn process_waiting(&mut self, available: f64) -> f64 {
        if self.pool.try_acquire() {
            self.state = AircraftState::Charging;
            return 0.0;
        }

        self.stats.wait_time_hours += available;
        available
    }

    /// Charge linearly until the offered time or a full battery, whichever
    /// comes first.  A full battery releases the charger and resumes
    /// flight.
    fn process_charging(&mut self, available: f64) -> f64 {
        let rate_kw = self.spec.charge_rate_kw();
        let deficit_kwh = self.spec.battery_capacity_kwh - self.battery_kwh;
        let time_to_full = deficit_kwh / rate_kw;
        let actual = available.min(time_to_full);

        self.stats.charge_time_hours += actual;
        self.battery_kwh += rate_kw * actual;

        debug_assert!(
            self.battery_kwh <= self.spec.battery_capacity_kwh + BATTERY_EPSILON_KWH,
            "{}: battery charged past capacity beyond clamping ({} kWh)",
            self.id,
            self.battery_kwh
        );
        if self.battery_kwh >= self.spec.battery_capacity_kwh - BATTERY_EPSILON_KWH {
            self.battery_kwh = self.spec.battery_capacity_kwh;
            self.state = AircraftState::Flying;
            self.pool.release();
        }

        actual
    }

    /// One Bernoulli fault draw per flight sub-step: `u < rate × t`.
    ///
    /// A single deviate per sub-step (not per flight-hour) approximates a
    /// Poisson process whose expected count over the run is
    /// `fault_prob_per_hour × total_flight_time`.
    fn check_faults(&mut self, flight_hours: f64) {
        if self.rng.uniform() < self.spec.fault_prob_per_hour * flight_hours {
            self.stats.fault_count += 1;
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AircraftId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> Manufacturer {
        self.kind
    }

    /// Catalog display name, e.g. `"Alpha"`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    #[inline]
    pub fn state(&self) -> AircraftState {
        self.state
    }

    #[inline]
    pub fn battery_kwh(&self) -> f64 {
        self.battery_kwh
    }

    #[inline]
    pub fn stats(&self) -> &AircraftStats {
        &self.stats
    }
}
