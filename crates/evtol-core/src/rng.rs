//! Deterministic per-aircraft and factory-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each aircraft gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (aircraft_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive aircraft IDs uniformly across the seed space.
//! This means:
//!
//! - Aircraft never share RNG state — fault draws are independent and each
//!   stream is local to the owning worker thread, with no synchronisation.
//! - Growing the fleet does not disturb the seeds of existing aircraft, so
//!   runs are reproducible as the fleet scales.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AircraftId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AircraftRng ───────────────────────────────────────────────────────────────

/// Per-aircraft deterministic RNG.
///
/// Create one per aircraft at fleet construction and move it into the
/// aircraft; it then lives on that aircraft's worker thread for the whole
/// run.
pub struct AircraftRng(SmallRng);

impl AircraftRng {
    /// Seed deterministically from the run's global seed and an aircraft ID.
    pub fn new(global_seed: u64, aircraft: AircraftId) -> Self {
        let seed = global_seed ^ (aircraft.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AircraftRng(SmallRng::seed_from_u64(seed))
    }

    /// One uniform deviate in `[0, 1)` — the per-sub-step fault draw.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── FleetRng ──────────────────────────────────────────────────────────────────

/// Factory-level RNG for fleet construction (manufacturer assignment).
///
/// Used only on the construction thread, before any worker starts.
pub struct FleetRng(SmallRng);

impl FleetRng {
    pub fn new(seed: u64) -> Self {
        FleetRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
