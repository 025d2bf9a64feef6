//! Operational states of an aircraft.

use std::fmt;

/// The three operational states.
///
/// Transitions are driven entirely by the precision loop in
/// [`Aircraft::update`][crate::Aircraft::update]:
///
/// | From     | Event                     | To       |
/// |----------|---------------------------|----------|
/// | Flying   | battery depleted          | Waiting  |
/// | Waiting  | charger acquired          | Charging |
/// | Charging | battery full (+ release)  | Flying   |
///
/// There is no terminal state; the run is terminated externally.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AircraftState {
    /// Airborne at cruise, draining the battery.
    Flying,
    /// Battery empty, polling the charger pool.
    Waiting,
    /// Holding a charger, restoring the battery.
    Charging,
}

impl AircraftState {
    pub fn as_str(self) -> &'static str {
        match self {
            AircraftState::Flying => "Flying",
            AircraftState::Waiting => "Waiting",
            AircraftState::Charging => "Charging",
        }
    }
}

impl fmt::Display for AircraftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
