//! Test helpers for common record fixtures.
//!
//! The default driver travels (0,0) -> (1,1) at 09:00 with a 5 km detour
//! budget and no preferences. The default rider travels (0.01,0.01) ->
//! (1.01,1.01) at 09:10, about 1.57 km from the driver at both ends, so the
//! two defaults are compatible.

use chrono::NaiveTime;

use crate::geo::GeoPoint;
use crate::model::{Commuter, Driver, Rider};

pub const TEST_DRIVER_START: GeoPoint = GeoPoint::new(0.0, 0.0);
pub const TEST_DRIVER_DESTINATION: GeoPoint = GeoPoint::new(1.0, 1.0);
pub const TEST_RIDER_START: GeoPoint = GeoPoint::new(0.01, 0.01);
pub const TEST_RIDER_DESTINATION: GeoPoint = GeoPoint::new(1.01, 1.01);

/// Build a time from hours and minutes.
///
/// # Panics
///
/// Panics if the components are out of range.
pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time of day")
}

/// Builder for driver fixtures.
#[derive(Clone, Debug)]
pub struct DriverBuilder {
    commuter: Commuter,
    max_detour_km: f64,
    same_gender: bool,
}

impl DriverBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            commuter: Commuter {
                name: name.to_owned(),
                start: TEST_DRIVER_START,
                destination: TEST_DRIVER_DESTINATION,
                time_of_travel: hm(9, 0),
                gender: "Female".to_owned(),
                non_smoking: false,
            },
            max_detour_km: 5.0,
            same_gender: false,
        }
    }

    pub fn with_start(mut self, start: GeoPoint) -> Self {
        self.commuter.start = start;
        self
    }

    pub fn with_destination(mut self, destination: GeoPoint) -> Self {
        self.commuter.destination = destination;
        self
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.commuter.time_of_travel = time;
        self
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.commuter.gender = gender.to_owned();
        self
    }

    pub fn with_non_smoking(mut self, non_smoking: bool) -> Self {
        self.commuter.non_smoking = non_smoking;
        self
    }

    pub fn with_max_detour_km(mut self, km: f64) -> Self {
        self.max_detour_km = km;
        self
    }

    pub fn with_same_gender(mut self, same_gender: bool) -> Self {
        self.same_gender = same_gender;
        self
    }

    pub fn build(self) -> Driver {
        Driver {
            commuter: self.commuter,
            max_detour_km: self.max_detour_km,
            same_gender: self.same_gender,
        }
    }
}

/// Builder for rider fixtures.
#[derive(Clone, Debug)]
pub struct RiderBuilder {
    commuter: Commuter,
}

impl RiderBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            commuter: Commuter {
                name: name.to_owned(),
                start: TEST_RIDER_START,
                destination: TEST_RIDER_DESTINATION,
                time_of_travel: hm(9, 10),
                gender: "Male".to_owned(),
                non_smoking: true,
            },
        }
    }

    pub fn with_start(mut self, start: GeoPoint) -> Self {
        self.commuter.start = start;
        self
    }

    pub fn with_destination(mut self, destination: GeoPoint) -> Self {
        self.commuter.destination = destination;
        self
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.commuter.time_of_travel = time;
        self
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.commuter.gender = gender.to_owned();
        self
    }

    pub fn with_non_smoking(mut self, non_smoking: bool) -> Self {
        self.commuter.non_smoking = non_smoking;
        self
    }

    pub fn build(self) -> Rider {
        Rider {
            commuter: self.commuter,
        }
    }
}
