//! `evtol-sim` — tick loop orchestrator for the eVTOL fleet simulator.
//!
//! # Scheduling model
//!
//! One worker thread per aircraft plus a supervisor (the calling thread):
//!
//! ```text
//! worker (×N):                      supervisor:
//!   while running:                    while wall elapsed < duration:
//!     dt ← timing mode                  observer.on_progress(…)
//!     aircraft.update(dt)               sleep ~100 ms
//!     sleep tick remainder            running ← false
//!                                     join all workers
//! ```
//!
//! Workers suspend only at the intra-tick pacing sleep and the relaxed
//! polls of the shared termination flag; preemption granularity is one
//! tick.  The charger pool is the only cross-thread mutable state.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use evtol_core::SimConfig;
//! use evtol_sim::{FleetRunner, NoopObserver};
//!
//! let mut runner = FleetRunner::new(SimConfig::default())?;
//! runner.run(&mut NoopObserver);
//! let fleet = runner.fleet(); // hand to evtol-report
//! ```

pub mod driver;
pub mod error;
pub mod fleet;
pub mod observer;


pub use driver::FleetRunner;
pub use error::{SimError, SimResult};
pub use fleet::{FACTORY_SEED, build_fleet};
pub use observer::{NoopObserver, RunObserver};
