//! The `FleetRunner` and its per-aircraft worker loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use evtol_aircraft::{Aircraft, AircraftState};
use evtol_charger::ChargerPool;
use evtol_core::{SimConfig, TimingMode};

use crate::{RunObserver, SimResult, build_fleet};

/// How often the supervisor wakes to report progress.
const PROGRESS_INTERVAL: Duration = Duration::from_millis(100);

/// Owns the fleet and the charger pool; drives one worker thread per
/// aircraft until the wall-clock duration elapses.
///
/// After [`run`][Self::run] returns every worker has been joined, so
/// [`fleet`][Self::fleet] hands out coherent final state for reporting.
pub struct FleetRunner {
    config: SimConfig,
    pool: Arc<ChargerPool>,
    fleet: Vec<Aircraft>,
}

impl FleetRunner {
    /// Validate `config`, build the charger pool and the fleet.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;

        let pool = Arc::new(ChargerPool::new(config.num_chargers));
        let fleet = build_fleet(&config, Arc::clone(&pool));

        Ok(Self { config, pool, fleet })
    }

    /// Run the simulation for the configured wall-clock duration and block
    /// until every worker has exited.
    ///
    /// The supervisor (this thread) paces progress callbacks, raises the
    /// termination flag once the duration elapses, and the scope join
    /// guarantees no worker outlives this call.  No in-flight `update` is
    /// interrupted; workers observe the flag at the top of their next tick.
    pub fn run<O: RunObserver>(&mut self, observer: &mut O) {
        observer.on_start(self.fleet.len(), self.pool.capacity());
        log::info!(
            "deploying {} aircraft worker threads ({:?} timing, {} chargers)",
            self.fleet.len(),
            self.config.timing,
            self.pool.capacity()
        );

        let running = AtomicBool::new(true);
        let timing = self.config.timing;
        let tick = self.config.tick;
        let fixed_dt_hours = self.config.sim_dt_hours();
        let speedup = self.config.sim_speedup;
        let total = self.config.duration;

        let start = Instant::now();
        thread::scope(|s| {
            let running = &running;
            for aircraft in self.fleet.iter_mut() {
                s.spawn(move || worker_loop(aircraft, running, timing, tick, fixed_dt_hours, speedup));
            }

            loop {
                let elapsed = start.elapsed();
                if elapsed >= total {
                    break;
                }
                observer.on_progress(elapsed, total);
                thread::sleep(PROGRESS_INTERVAL.min(total - elapsed));
            }
            running.store(false, Ordering::SeqCst);
        });

        let elapsed = start.elapsed();
        log::info!("all workers joined after {:.1}s", elapsed.as_secs_f64());
        debug_assert_eq!(
            self.pool.available(),
            self.pool.capacity() - self.charging_count(),
            "pool availability must match the number of aircraft still charging"
        );
        observer.on_finish(elapsed);
    }

    // ── Accessors (valid once `run` has returned) ─────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn pool(&self) -> &ChargerPool {
        &self.pool
    }

    pub fn fleet(&self) -> &[Aircraft] {
        &self.fleet
    }

    /// Number of aircraft whose final state is Charging (each holds one
    /// charger).
    pub fn charging_count(&self) -> u32 {
        self.fleet
            .iter()
            .filter(|ac| ac.state() == AircraftState::Charging)
            .count() as u32
    }
}

/// Per-aircraft tick loop.
///
/// FIXED passes the constant dt and sleeps off the tick remainder;
/// COMPENSATED derives dt from the wall time actually elapsed since the
/// previous wake, so total simulated time tracks wall × speedup under
/// scheduling jitter.
fn worker_loop(
    aircraft: &mut Aircraft,
    running: &AtomicBool,
    timing: TimingMode,
    tick: Duration,
    fixed_dt_hours: f64,
    speedup: f64,
) {
    log::debug!("worker {} starting", aircraft.id());

    let mut last_wake = Instant::now();
    while running.load(Ordering::Relaxed) {
        let wake = Instant::now();
        let dt_hours = match timing {
            TimingMode::Fixed => fixed_dt_hours,
            TimingMode::Compensated => {
                let dt = wake.duration_since(last_wake).as_secs_f64() * speedup / 3600.0;
                last_wake = wake;
                dt
            }
        };

        aircraft.update(dt_hours);

        let spent = wake.elapsed();
        if spent < tick {
            thread::sleep(tick - spent);
        }
    }

    log::debug!(
        "worker {} exiting after {} ticks in state {}",
        aircraft.id(),
        aircraft.stats().completed_ticks,
        aircraft.state()
    );
}
