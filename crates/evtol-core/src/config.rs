//! Run configuration and tick timing strategy.
//!
//! # Timing model
//!
//! The driver advances every aircraft once per wall-clock tick.  The amount
//! of *simulated* time handed to each `update` call depends on the
//! [`TimingMode`]:
//!
//! - **Fixed** — every tick passes the constant [`SimConfig::sim_dt_hours`].
//!   Under scheduler jitter the total simulated time drifts from
//!   wall-clock × speedup.
//! - **Compensated** — every tick passes the wall-clock time actually
//!   elapsed since the previous wake, scaled by the speedup.  Total
//!   simulated time tracks the wall clock regardless of jitter.
//!
//! The defaults map one wall-clock second to one simulated minute: a 10 ms
//! tick at 60× speedup gives a fixed dt of 1/6000 h per tick.

use std::time::Duration;

use crate::{CoreError, CoreResult};

/// Default wall-clock tick length.
pub const DEFAULT_TICK: Duration = Duration::from_millis(10);

/// Default simulated-seconds-per-wall-second ratio (1 s ≙ 1 min).
pub const DEFAULT_SIM_SPEEDUP: f64 = 60.0;

// ── TimingMode ────────────────────────────────────────────────────────────────

/// How the per-tick simulated delta is derived from wall-clock time.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum TimingMode {
    /// Constant `sim_dt_hours` per tick; simulated time may drift under
    /// scheduling jitter.
    #[default]
    Fixed,
    /// Measure wall-clock elapsed since the previous wake each tick;
    /// simulated time tracks wall-clock × speedup.
    Compensated,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Fleet size (one worker thread per aircraft).
    pub num_aircraft: usize,

    /// Charger pool capacity.
    pub num_chargers: u32,

    /// Wall-clock run length; the termination flag is raised once this
    /// much real time has elapsed.
    pub duration: Duration,

    /// Wall-clock tick length each worker paces itself against.
    pub tick: Duration,

    /// Simulated seconds per wall-clock second.
    pub sim_speedup: f64,

    /// Tick timing strategy.
    pub timing: TimingMode,

    /// Seed for the per-aircraft fault RNG streams.  The same seed always
    /// produces the same fault draws; the manufacturer assignment is seeded
    /// separately (and contractually) by the fleet factory.
    pub seed: u64,
}

impl Default for SimConfig {
    /// The problem's fixed operating parameters: 20 aircraft, 3 chargers,
    /// 3.0 minutes of wall-clock time.
    fn default() -> Self {
        Self {
            num_aircraft: 20,
            num_chargers: 3,
            duration: Duration::from_secs(180),
            tick: DEFAULT_TICK,
            sim_speedup: DEFAULT_SIM_SPEEDUP,
            timing: TimingMode::Fixed,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Simulated hours handed to each `update` call in [`TimingMode::Fixed`].
    #[inline]
    pub fn sim_dt_hours(&self) -> f64 {
        self.tick.as_secs_f64() * self.sim_speedup / 3600.0
    }

    /// Reject configurations the driver cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_aircraft == 0 {
            return Err(CoreError::Config("fleet must contain at least one aircraft".into()));
        }
        if self.num_chargers == 0 {
            return Err(CoreError::Config("charger pool must contain at least one charger".into()));
        }
        if self.duration.is_zero() {
            return Err(CoreError::Config("run duration must be positive".into()));
        }
        if self.tick.is_zero() {
            return Err(CoreError::Config("tick length must be positive".into()));
        }
        if !(self.sim_speedup > 0.0) {
            return Err(CoreError::Config("sim speedup must be positive".into()));
        }
        Ok(())
    }
}
