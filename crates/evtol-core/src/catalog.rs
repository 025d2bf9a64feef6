//! Immutable manufacturer catalog.
//!
//! Five aircraft models with fixed hardware parameters.  The catalog is a
//! `static` table; [`spec_of`] is a total lookup over the [`Manufacturer`]
//! enum, so an out-of-range manufacturer is unrepresentable past the decode
//! boundary ([`Manufacturer::from_index`]).

use std::fmt;

// ── Manufacturer ──────────────────────────────────────────────────────────────

/// One of the five aircraft models in the catalog.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Manufacturer {
    Alpha,
    Beta,
    Charlie,
    Delta,
    Echo,
}

impl Manufacturer {
    /// All manufacturers in catalog order.
    pub const ALL: [Manufacturer; 5] = [
        Manufacturer::Alpha,
        Manufacturer::Beta,
        Manufacturer::Charlie,
        Manufacturer::Delta,
        Manufacturer::Echo,
    ];

    /// Number of catalog entries.
    pub const COUNT: usize = Self::ALL.len();

    /// Decode a catalog index (e.g. a factory RNG draw).  Returns `None`
    /// for indices outside `0..5`.
    #[inline]
    pub fn from_index(index: usize) -> Option<Manufacturer> {
        Self::ALL.get(index).copied()
    }

    /// The catalog index of this manufacturer.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The hardware specification for this model.
    #[inline]
    pub fn spec(self) -> &'static ManufacturerSpec {
        spec_of(self)
    }

    /// Display name, e.g. `"Alpha"`.
    #[inline]
    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── ManufacturerSpec ──────────────────────────────────────────────────────────

/// Hardware parameters for one aircraft model.
///
/// All numeric fields are positive; `passenger_count >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ManufacturerSpec {
    pub name: &'static str,
    pub cruise_speed_mph: f64,
    pub battery_capacity_kwh: f64,
    pub time_to_charge_hours: f64,
    pub energy_use_kwh_per_mile: f64,
    pub passenger_count: u32,
    pub fault_prob_per_hour: f64,
}

impl ManufacturerSpec {
    /// Power draw at cruise, in kW: kWh/mi × mph.
    #[inline]
    pub fn cruise_power_kw(&self) -> f64 {
        self.energy_use_kwh_per_mile * self.cruise_speed_mph
    }

    /// Linear charge rate, in kW: full capacity over time-to-full-charge.
    #[inline]
    pub fn charge_rate_kw(&self) -> f64 {
        self.battery_capacity_kwh / self.time_to_charge_hours
    }

    /// Flight hours available on a full battery at cruise power.
    #[inline]
    pub fn full_endurance_hours(&self) -> f64 {
        self.battery_capacity_kwh / self.cruise_power_kw()
    }
}

// ── Catalog table ─────────────────────────────────────────────────────────────

static CATALOG: [ManufacturerSpec; Manufacturer::COUNT] = [
    // Name       mph    kWh    ChgH   kWh/mi  Pax  Fault/h
    ManufacturerSpec {
        name: "Alpha",
        cruise_speed_mph: 120.0,
        battery_capacity_kwh: 320.0,
        time_to_charge_hours: 0.60,
        energy_use_kwh_per_mile: 1.6,
        passenger_count: 4,
        fault_prob_per_hour: 0.25,
    },
    ManufacturerSpec {
        name: "Beta",
        cruise_speed_mph: 100.0,
        battery_capacity_kwh: 100.0,
        time_to_charge_hours: 0.20,
        energy_use_kwh_per_mile: 1.5,
        passenger_count: 5,
        fault_prob_per_hour: 0.10,
    },
    ManufacturerSpec {
        name: "Charlie",
        cruise_speed_mph: 160.0,
        battery_capacity_kwh: 220.0,
        time_to_charge_hours: 0.80,
        energy_use_kwh_per_mile: 2.2,
        passenger_count: 3,
        fault_prob_per_hour: 0.05,
    },
    ManufacturerSpec {
        name: "Delta",
        cruise_speed_mph: 90.0,
        battery_capacity_kwh: 120.0,
        time_to_charge_hours: 0.62,
        energy_use_kwh_per_mile: 0.8,
        passenger_count: 2,
        fault_prob_per_hour: 0.22,
    },
    ManufacturerSpec {
        name: "Echo",
        cruise_speed_mph: 30.0,
        battery_capacity_kwh: 150.0,
        time_to_charge_hours: 0.30,
        energy_use_kwh_per_mile: 5.8,
        passenger_count: 2,
        fault_prob_per_hour: 0.61,
    },
];

/// Look up the hardware spec for `kind`.  Total over the enum; no
/// allocation, no failure path.
#[inline]
pub fn spec_of(kind: Manufacturer) -> &'static ManufacturerSpec {
    debug_assert_catalog_invariants();
    &CATALOG[kind as usize]
}

/// One-shot debug validation of the catalog's positivity invariants.
/// Compiles to nothing in release builds.
#[inline]
fn debug_assert_catalog_invariants() {
    #[cfg(debug_assertions)]
    {
        use std::sync::Once;

        static CHECK: Once = Once::new();
        CHECK.call_once(|| {
            for spec in &CATALOG {
                assert!(spec.cruise_speed_mph > 0.0, "{}: cruise speed", spec.name);
                assert!(spec.battery_capacity_kwh > 0.0, "{}: battery capacity", spec.name);
                assert!(spec.time_to_charge_hours > 0.0, "{}: time to charge", spec.name);
                assert!(spec.energy_use_kwh_per_mile > 0.0, "{}: energy use", spec.name);
                assert!(spec.passenger_count >= 1, "{}: passenger count", spec.name);
                assert!(spec.fault_prob_per_hour > 0.0, "{}: fault probability", spec.name);
            }
        });
    }
}
