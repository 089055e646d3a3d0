//! The driver/rider compatibility predicate.
//!
//! Clauses are checked in a fixed order and the first one that fails is
//! reported:
//!
//! 1. pickup: driver start to rider start within the driver's max detour
//! 2. drop-off: driver destination to rider destination within the max detour
//! 3. time: departure times within the configured threshold
//! 4. gender: equal genders, only when the driver asked for it
//! 5. smoking: rider is non-smoking, only when the driver is

use std::fmt;

use crate::config::MatchConfig;
use crate::model::{Driver, Rider};
use crate::time::{gap_minutes, travel_time_gap};

/// The first predicate clause a rider failed for a given driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Incompatibility {
    PickupTooFar { distance_km: f64, max_detour_km: f64 },
    DropoffTooFar { distance_km: f64, max_detour_km: f64 },
    TimeMismatch { gap_minutes: f64, threshold_minutes: u32 },
    GenderMismatch,
    SmokingPreference,
}

impl fmt::Display for Incompatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Incompatibility::PickupTooFar {
                distance_km,
                max_detour_km,
            } => write!(
                f,
                "pickup is {distance_km:.2} km away (max detour {max_detour_km} km)"
            ),
            Incompatibility::DropoffTooFar {
                distance_km,
                max_detour_km,
            } => write!(
                f,
                "drop-off is {distance_km:.2} km away (max detour {max_detour_km} km)"
            ),
            Incompatibility::TimeMismatch {
                gap_minutes,
                threshold_minutes,
            } => write!(
                f,
                "departure times differ by {gap_minutes:.1} min (threshold {threshold_minutes} min)"
            ),
            Incompatibility::GenderMismatch => f.write_str("driver requires the same gender"),
            Incompatibility::SmokingPreference => f.write_str("driver requires a non-smoking rider"),
        }
    }
}

/// Check whether `rider` may join `driver`'s group.
pub fn check_compatibility(
    driver: &Driver,
    rider: &Rider,
    config: &MatchConfig,
) -> Result<(), Incompatibility> {
    let d = &driver.commuter;
    let r = &rider.commuter;

    let pickup_km = d.start.distance_km(&r.start);
    if pickup_km > driver.max_detour_km {
        return Err(Incompatibility::PickupTooFar {
            distance_km: pickup_km,
            max_detour_km: driver.max_detour_km,
        });
    }

    let dropoff_km = d.destination.distance_km(&r.destination);
    if dropoff_km > driver.max_detour_km {
        return Err(Incompatibility::DropoffTooFar {
            distance_km: dropoff_km,
            max_detour_km: driver.max_detour_km,
        });
    }

    let gap = travel_time_gap(d.time_of_travel, r.time_of_travel, config.wrap_midnight);
    if gap > config.time_threshold() {
        return Err(Incompatibility::TimeMismatch {
            gap_minutes: gap_minutes(gap),
            threshold_minutes: config.time_threshold_minutes,
        });
    }

    if driver.same_gender && d.gender != r.gender {
        return Err(Incompatibility::GenderMismatch);
    }

    if d.non_smoking && !r.non_smoking {
        return Err(Incompatibility::SmokingPreference);
    }

    Ok(())
}
