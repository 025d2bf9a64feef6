//! `evtol-charger` — the shared charger pool.
//!
//! A bounded counting permit with linearizable, never-blocking
//! `try_acquire` / `release`.  See [`ChargerPool`] for the contract.

pub mod pool;


pub use pool::ChargerPool;
