//! `evtol-core` — foundational types for the eVTOL fleet simulator.
//!
//! This crate is a dependency of every other `evtol-*` crate.  It has no
//! `evtol-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`ids`]     | `AircraftId`                                        |
//! | [`catalog`] | `Manufacturer`, `ManufacturerSpec`, `spec_of`       |
//! | [`config`]  | `SimConfig`, `TimingMode`                           |
//! | [`rng`]     | `AircraftRng` (per-aircraft), `FleetRng` (factory)  |
//! | [`error`]   | `CoreError`, `CoreResult`                           |

pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use catalog::{Manufacturer, ManufacturerSpec, spec_of};
pub use config::{SimConfig, TimingMode};
pub use error::{CoreError, CoreResult};
pub use ids::AircraftId;
pub use rng::{AircraftRng, FleetRng};
