//! `evtol-aircraft` — the per-aircraft state machine.
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`state`]    | `AircraftState` (Flying / Waiting / Charging)     |
//! | [`stats`]    | `AircraftStats` KPI accumulator                   |
//! | [`aircraft`] | `Aircraft` and its precision `update` loop        |

pub mod aircraft;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests;

pub use aircraft::{Aircraft, BATTERY_EPSILON_KWH, LOOP_EPSILON_HOURS};
pub use state::AircraftState;
pub use stats::AircraftStats;
