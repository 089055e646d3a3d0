use chrono::NaiveTime;
use serde::Serialize;

use crate::error::RecordError;
use crate::geo::GeoPoint;
use crate::model::{Driver, Rider, Role};

/// A driver and the riders accepted into their car.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarpoolGroup {
    pub driver: String,
    /// Rider names in the order they were accepted.
    pub riders: Vec<String>,
    /// Position of each accepted rider in the slice passed to the matcher,
    /// parallel to `riders`. Names are not guaranteed unique.
    #[serde(skip)]
    pub rider_indices: Vec<usize>,
    pub start: GeoPoint,
    pub destination: GeoPoint,
    pub time: NaiveTime,
    /// Running total over all riders in the group (kg CO2).
    pub carbon_saved_kg: f64,
}

impl CarpoolGroup {
    /// Empty group seeded with the driver's route and time.
    pub fn for_driver(driver: &Driver) -> Self {
        Self {
            driver: driver.commuter.name.clone(),
            riders: Vec::new(),
            rider_indices: Vec::new(),
            start: driver.commuter.start,
            destination: driver.commuter.destination,
            time: driver.commuter.time_of_travel,
            carbon_saved_kg: 0.0,
        }
    }

    pub fn add_rider(&mut self, index: usize, name: &str, carbon_saved_kg: f64) {
        self.riders.push(name.to_owned());
        self.rider_indices.push(index);
        self.carbon_saved_kg += carbon_saved_kg;
    }

    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }

    pub fn contains_rider(&self, name: &str) -> bool {
        self.riders.iter().any(|rider| rider == name)
    }

    pub fn rounded_carbon_saved_kg(&self) -> f64 {
        round_to_cents(self.carbon_saved_kg)
    }
}

/// A record left out of matching, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub role: Role,
    pub name: String,
    pub error: RecordError,
}

impl SkippedRecord {
    pub fn driver(driver: &Driver, error: RecordError) -> Self {
        Self {
            role: Role::Driver,
            name: driver.name().to_owned(),
            error,
        }
    }

    pub fn rider(rider: &Rider, error: RecordError) -> Self {
        Self {
            role: Role::Rider,
            name: rider.name().to_owned(),
            error,
        }
    }
}

/// Result of a grouping pass: emitted groups plus per-record diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
    pub groups: Vec<CarpoolGroup>,
    pub skipped: Vec<SkippedRecord>,
}

impl MatchOutcome {
    pub fn group_for(&self, driver: &str) -> Option<&CarpoolGroup> {
        self.groups.iter().find(|group| group.driver == driver)
    }
}

/// Round to two decimal places, ties to even on the exact binary value.
pub fn round_to_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
