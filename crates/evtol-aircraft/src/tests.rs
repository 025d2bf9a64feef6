//! Unit tests for the aircraft precision loop.

use std::sync::Arc;

use evtol_charger::ChargerPool;
use evtol_core::{AircraftId, AircraftRng, Manufacturer};

use crate::{Aircraft, AircraftState};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A pool big enough that acquisition never fails.
fn open_pool() -> Arc<ChargerPool> {
    Arc::new(ChargerPool::new(1_000))
}

fn aircraft(kind: Manufacturer, pool: Arc<ChargerPool>) -> Aircraft {
    aircraft_seeded(kind, pool, 42)
}

fn aircraft_seeded(kind: Manufacturer, pool: Arc<ChargerPool>, seed: u64) -> Aircraft {
    Aircraft::new(AircraftId(0), kind, pool, AircraftRng::new(seed, AircraftId(0)))
}

fn assert_near(got: f64, want: f64, tol: f64, what: &str) {
    assert!((got - want).abs() <= tol, "{what}: got {got}, want {want} ± {tol}");
}

// ── Spec scenarios ────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    /// Alpha flying one full hour well within endurance.
    /// Battery: 320 − 120 × 1.6 = 128 kWh; pax-miles: 120 × 4 = 480.
    #[test]
    fn alpha_one_hour_cruise() {
        let mut ac = aircraft(Manufacturer::Alpha, open_pool());
        ac.update(1.0);

        assert_eq!(ac.state(), AircraftState::Flying);
        assert_near(ac.battery_kwh(), 128.0, 1e-3, "battery");
        assert_near(ac.stats().flight_time_hours, 1.0, 1e-9, "flight time");
        assert_near(ac.stats().passenger_miles, 480.0, 1e-9, "passenger miles");
        assert_near(ac.stats().distance_miles, 120.0, 1e-9, "distance");
        assert_eq!(ac.stats().wait_time_hours, 0.0);
        assert_eq!(ac.stats().charge_time_hours, 0.0);
    }

    /// Beta depletes mid-step (endurance 100/150 ≈ 0.667 h) and the
    /// remainder of the 0.7 h step flows Waiting → Charging seamlessly.
    #[test]
    fn beta_depletes_mid_step_and_starts_charging() {
        let mut ac = aircraft(Manufacturer::Beta, open_pool());
        ac.update(0.7);

        assert_eq!(ac.state(), AircraftState::Charging);
        assert_near(ac.stats().flight_time_hours, 0.6667, 1e-3, "flight time");
        assert_near(ac.stats().charge_time_hours, 0.0333, 1e-3, "charge time");
        assert_eq!(ac.stats().wait_time_hours, 0.0);
    }

    /// Delta against an empty pool: endurance ≈ 1.667 h, the rest of the
    /// 2.0 h step is spent waiting.
    #[test]
    fn delta_waits_when_no_charger_exists() {
        let pool = Arc::new(ChargerPool::new(0));
        let mut ac = aircraft(Manufacturer::Delta, pool);
        ac.update(2.0);

        assert_eq!(ac.state(), AircraftState::Waiting);
        assert_eq!(ac.battery_kwh(), 0.0);
        assert_eq!(ac.stats().charge_time_hours, 0.0);
        assert!(ac.stats().wait_time_hours > 0.3, "wait = {}", ac.stats().wait_time_hours);
        assert_near(ac.stats().flight_time_hours, 120.0 / 72.0, 1e-3, "flight time");
    }

    /// Charlie across two updates: deplete at 0.625 h, charge 0.075 h in
    /// the first call; finish charging (0.8 h full-charge) and fly the
    /// remaining 0.275 h of the second call.
    /// Battery: 220 − 352 × 0.275 = 123.2 kWh; pax-miles 0.9 h × 160 × 3.
    #[test]
    fn charlie_full_cycle_across_two_updates() {
        let mut ac = aircraft(Manufacturer::Charlie, open_pool());

        ac.update(0.7);
        assert_eq!(ac.state(), AircraftState::Charging);

        ac.update(1.0);
        assert_eq!(ac.state(), AircraftState::Flying);
        assert_near(ac.battery_kwh(), 123.2, 1e-3, "battery");
        assert_near(ac.stats().passenger_miles, 432.0, 1e-3, "passenger miles");
        assert_near(ac.stats().flight_time_hours, 0.9, 1e-3, "flight time");
    }

    /// Exactly one tick per update call, no matter how many sub-steps the
    /// call crossed.
    #[test]
    fn completed_ticks_counts_update_calls() {
        let mut ac = aircraft(Manufacturer::Beta, open_pool());

        // Crosses Flying → Waiting → Charging → Flying in one call.
        ac.update(1.0);
        assert_eq!(ac.stats().completed_ticks, 1);

        for _ in 0..99 {
            ac.update(1.0 / 6000.0);
        }
        assert_eq!(ac.stats().completed_ticks, 100);
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use super::*;

    /// flight + wait + charge over any single update equals dt.
    #[test]
    fn time_is_conserved_across_states() {
        // Capacity-0 pool forces the Waiting branch into the mix.
        let pool = Arc::new(ChargerPool::new(0));
        let mut ac = aircraft(Manufacturer::Beta, pool);

        let mut accounted = 0.0;
        for dt in [0.25, 0.5, 1.0, 0.7, 0.01] {
            ac.update(dt);
            accounted += dt;
            assert_near(ac.stats().total_hours(), accounted, 1e-6, "accounted time");
        }
    }

    /// Same, with an open pool so the Charging branch participates.
    #[test]
    fn time_is_conserved_through_charge_cycles() {
        let mut ac = aircraft(Manufacturer::Echo, open_pool());

        let mut accounted = 0.0;
        for _ in 0..40 {
            ac.update(0.33);
            accounted += 0.33;
            assert_near(ac.stats().total_hours(), accounted, 1e-6, "accounted time");
        }
    }

    #[test]
    fn battery_stays_in_range_and_stats_stay_monotone() {
        let mut ac = aircraft(Manufacturer::Delta, open_pool());
        let capacity = Manufacturer::Delta.spec().battery_capacity_kwh;

        let mut prev = ac.stats().clone();
        for i in 0..500 {
            ac.update(0.05 + (i % 7) as f64 * 0.03);

            let battery = ac.battery_kwh();
            assert!((0.0..=capacity).contains(&battery), "battery {battery} out of range");

            let stats = ac.stats();
            assert!(stats.flight_time_hours >= prev.flight_time_hours);
            assert!(stats.charge_time_hours >= prev.charge_time_hours);
            assert!(stats.wait_time_hours >= prev.wait_time_hours);
            assert!(stats.passenger_miles >= prev.passenger_miles);
            assert!(stats.distance_miles >= prev.distance_miles);
            assert!(stats.fault_count >= prev.fault_count);
            assert_eq!(stats.completed_ticks, prev.completed_ticks + 1);
            prev = stats.clone();
        }
    }

    /// One coarse update and many fine updates integrate to the same
    /// trajectory.
    #[test]
    fn micro_stepping_matches_single_step() {
        let mut coarse = aircraft(Manufacturer::Beta, open_pool());
        coarse.update(1.0);

        let mut fine = aircraft(Manufacturer::Beta, open_pool());
        const N: usize = 1_000;
        for _ in 0..N {
            fine.update(1.0 / N as f64);
        }

        assert_near(fine.stats().flight_time_hours, coarse.stats().flight_time_hours, 1e-3, "flight");
        assert_near(fine.stats().charge_time_hours, coarse.stats().charge_time_hours, 1e-3, "charge");
        assert_near(fine.stats().wait_time_hours, coarse.stats().wait_time_hours, 1e-3, "wait");
        assert_near(fine.battery_kwh(), coarse.battery_kwh(), 1e-3, "battery");
    }

    /// Fixed RNG seed ⇒ identical KPIs, fault counts included.
    #[test]
    fn identical_seeds_produce_identical_runs() {
        let mut a = aircraft_seeded(Manufacturer::Echo, open_pool(), 7);
        let mut b = aircraft_seeded(Manufacturer::Echo, open_pool(), 7);

        for _ in 0..200 {
            a.update(0.2);
            b.update(0.2);
        }

        assert_eq!(a.stats(), b.stats());
        assert_eq!(a.battery_kwh().to_bits(), b.battery_kwh().to_bits());
        assert_eq!(a.state(), b.state());
    }
}

// ── Pool interaction ──────────────────────────────────────────────────────────

#[cfg(test)]
mod pool_interaction {
    use super::*;

    /// A depleted aircraft holds exactly one charger while Charging and
    /// returns it when full.
    #[test]
    fn charger_is_held_for_the_charge_and_released_when_full() {
        let pool = Arc::new(ChargerPool::new(2));
        let mut ac = aircraft(Manufacturer::Beta, Arc::clone(&pool));

        // Deplete and begin charging within one call.
        ac.update(0.7);
        assert_eq!(ac.state(), AircraftState::Charging);
        assert_eq!(pool.in_use(), 1);

        // Beta's full charge takes 0.2 h; this finishes it and resumes flight.
        ac.update(0.2);
        assert_eq!(ac.state(), AircraftState::Flying);
        assert_eq!(pool.in_use(), 0);
    }

    /// Capacity 1, two depleted aircraft: exactly one charges, the other
    /// waits, until the first releases.
    #[test]
    fn single_charger_contention() {
        let pool = Arc::new(ChargerPool::new(1));
        let mut first = Aircraft::new(
            AircraftId(0),
            Manufacturer::Beta,
            Arc::clone(&pool),
            AircraftRng::new(42, AircraftId(0)),
        );
        let mut second = Aircraft::new(
            AircraftId(1),
            Manufacturer::Beta,
            Arc::clone(&pool),
            AircraftRng::new(42, AircraftId(1)),
        );

        // Both deplete; the first to poll wins the only charger.
        first.update(0.7);
        second.update(0.7);
        assert_eq!(first.state(), AircraftState::Charging);
        assert_eq!(second.state(), AircraftState::Waiting);
        assert_eq!(pool.available(), 0);

        // While the charger is held, the loser keeps waiting.
        second.update(0.1);
        assert_eq!(second.state(), AircraftState::Waiting);
        assert!(second.stats().wait_time_hours > 0.0);

        // First finishes charging (0.2 h total) and releases; now the
        // second can claim it.
        first.update(0.2);
        assert_eq!(first.state(), AircraftState::Flying);
        second.update(0.05);
        assert_eq!(second.state(), AircraftState::Charging);
        assert_eq!(pool.available(), 0);
    }
}
