//! Deterministic fleet construction.

use std::sync::Arc;

use evtol_aircraft::Aircraft;
use evtol_charger::ChargerPool;
use evtol_core::{AircraftId, AircraftRng, FleetRng, Manufacturer, SimConfig};

/// Seed for the manufacturer-assignment draws.  This value is contractual:
/// every run must produce the same fleet composition.
pub const FACTORY_SEED: u64 = 12345;

/// Build `config.num_aircraft` aircraft sharing `pool`.
///
/// Manufacturer types are drawn uniformly from the catalog with a
/// [`FleetRng`] seeded by [`FACTORY_SEED`], so the assignment is identical
/// across runs.  Each aircraft's private fault RNG is seeded from
/// `config.seed` mixed with its ID, giving independent per-aircraft
/// streams that are reproducible under a fixed seed.
pub fn build_fleet(config: &SimConfig, pool: Arc<ChargerPool>) -> Vec<Aircraft> {
    let mut factory = FleetRng::new(FACTORY_SEED);

    (0..config.num_aircraft)
        .map(|i| {
            let id = AircraftId(i as u32);
            let kind = Manufacturer::from_index(factory.gen_range(0..Manufacturer::COUNT))
                .expect("factory draw within catalog range");
            let rng = AircraftRng::new(config.seed, id);
            Aircraft::new(id, kind, Arc::clone(&pool), rng)
        })
        .collect()
}
