//! Trip request records.
//!
//! Every person in a dataset is either a driver offering seats or a rider
//! looking for one. Both share a [`Commuter`] describing the trip itself;
//! drivers add their detour tolerance and gender preference.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::geo::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Driver,
    Rider,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Driver => f.write_str("Driver"),
            Role::Rider => f.write_str("Rider"),
        }
    }
}

/// Trip fields common to drivers and riders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commuter {
    pub name: String,
    pub start: GeoPoint,
    pub destination: GeoPoint,
    pub time_of_travel: NaiveTime,
    pub gender: String,
    pub non_smoking: bool,
}

impl Commuter {
    /// Distance of the commuter's own trip in kilometers.
    pub fn trip_distance_km(&self) -> f64 {
        self.start.distance_km(&self.destination)
    }

    fn validate(&self) -> Result<(), RecordError> {
        if self.name.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }
        check_location("start", self.start)?;
        check_location("destination", self.destination)
    }
}

fn check_location(endpoint: &'static str, point: GeoPoint) -> Result<(), RecordError> {
    if point.is_valid() {
        Ok(())
    } else {
        Err(RecordError::InvalidLocation {
            endpoint,
            lat: point.lat,
            lon: point.lon,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub commuter: Commuter,
    /// Maximum distance (km) the driver will deviate at either end of the trip.
    pub max_detour_km: f64,
    /// When set, only riders of the driver's gender are accepted.
    pub same_gender: bool,
}

impl Driver {
    pub fn name(&self) -> &str {
        &self.commuter.name
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        self.commuter.validate()?;
        if !self.max_detour_km.is_finite() || self.max_detour_km < 0.0 {
            return Err(RecordError::InvalidDetour(self.max_detour_km));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rider {
    pub commuter: Commuter,
}

impl Rider {
    pub fn name(&self) -> &str {
        &self.commuter.name
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        self.commuter.validate()
    }
}

/// One row of a trip request dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PersonRecord {
    Driver(Driver),
    Rider(Rider),
}

impl PersonRecord {
    pub fn role(&self) -> Role {
        match self {
            PersonRecord::Driver(_) => Role::Driver,
            PersonRecord::Rider(_) => Role::Rider,
        }
    }

    pub fn commuter(&self) -> &Commuter {
        match self {
            PersonRecord::Driver(driver) => &driver.commuter,
            PersonRecord::Rider(rider) => &rider.commuter,
        }
    }

    pub fn name(&self) -> &str {
        &self.commuter().name
    }
}

/// Split records into drivers and riders, keeping the input order within each role.
pub fn split_by_role(records: impl IntoIterator<Item = PersonRecord>) -> (Vec<Driver>, Vec<Rider>) {
    let mut drivers = Vec::new();
    let mut riders = Vec::new();
    for record in records {
        match record {
            PersonRecord::Driver(driver) => drivers.push(driver),
            PersonRecord::Rider(rider) => riders.push(rider),
        }
    }
    (drivers, riders)
}
