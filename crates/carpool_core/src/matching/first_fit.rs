use tracing::{debug, warn};

use super::predicate::check_compatibility;
use super::types::{CarpoolGroup, MatchOutcome, SkippedRecord};
use crate::config::{MatchConfig, RiderAssignment};
use crate::model::{Driver, Rider};

/// First-fit carpool grouping.
///
/// Drivers are visited in input order. Each driver scans the riders in input
/// order and takes every rider that passes the compatibility predicate, with
/// no scoring or capacity limit. Drivers that accept nobody produce no group.
///
/// With [`RiderAssignment::Shared`] a rider can be taken by several drivers;
/// with [`RiderAssignment::Exclusive`] the first driver to accept a rider keeps
/// them.
///
/// Time complexity: O(D × R).
#[derive(Debug, Clone, Default)]
pub struct FirstFitMatcher {
    config: MatchConfig,
}

impl FirstFitMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Group riders under drivers.
    ///
    /// Records that fail validation are left out and reported in
    /// [`MatchOutcome::skipped`]; the rest of the run is unaffected.
    pub fn form_groups(&self, drivers: &[Driver], riders: &[Rider]) -> MatchOutcome {
        let mut skipped = Vec::new();

        let candidates: Vec<(usize, &Rider)> = riders
            .iter()
            .enumerate()
            .filter(|(_, rider)| match rider.validate() {
                Ok(()) => true,
                Err(error) => {
                    warn!(rider = rider.name(), %error, "skipping rider record");
                    skipped.push(SkippedRecord::rider(rider, error));
                    false
                }
            })
            .collect();
        let mut taken = vec![false; riders.len()];

        let mut groups = Vec::new();
        for driver in drivers {
            if let Err(error) = driver.validate() {
                warn!(driver = driver.name(), %error, "skipping driver record");
                skipped.push(SkippedRecord::driver(driver, error));
                continue;
            }

            let mut group = CarpoolGroup::for_driver(driver);
            for &(idx, rider) in &candidates {
                if self.config.rider_assignment == RiderAssignment::Exclusive && taken[idx] {
                    continue;
                }
                match check_compatibility(driver, rider, &self.config) {
                    Ok(()) => {
                        let carbon_kg = self.config.emission_factor_kg_per_km
                            * rider.commuter.trip_distance_km();
                        group.add_rider(idx, rider.name(), carbon_kg);
                        taken[idx] = true;
                        debug!(driver = driver.name(), rider = rider.name(), carbon_kg, "rider matched");
                    }
                    Err(reason) => {
                        debug!(driver = driver.name(), rider = rider.name(), %reason, "rider rejected");
                    }
                }
            }

            if group.is_empty() {
                debug!(driver = driver.name(), "no compatible riders");
            } else {
                groups.push(group);
            }
        }

        MatchOutcome { groups, skipped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use crate::geo::GeoPoint;
    use crate::model::Role;
    use crate::test_helpers::{hm, DriverBuilder, RiderBuilder};

    #[test]
    fn reference_rider_joins_reference_driver() {
        let drivers = vec![DriverBuilder::new("D").build()];
        let riders = vec![RiderBuilder::new("R").build()];

        let outcome = FirstFitMatcher::default().form_groups(&drivers, &riders);

        assert_eq!(outcome.groups.len(), 1);
        let group = &outcome.groups[0];
        assert_eq!(group.driver, "D");
        assert_eq!(group.riders, ["R"]);
        assert!(outcome.skipped.is_empty());
        // About 0.12 x 157 km on the ellipsoid.
        assert!((group.carbon_saved_kg - 18.83).abs() < 0.15, "got {}", group.carbon_saved_kg);
    }

    #[test]
    fn rider_twenty_minutes_late_is_not_matched() {
        let drivers = vec![DriverBuilder::new("D").build()];
        let riders = vec![RiderBuilder::new("R").with_time(hm(9, 20)).build()];

        let outcome = FirstFitMatcher::default().form_groups(&drivers, &riders);

        assert!(outcome.groups.is_empty());
    }

    #[test]
    fn carbon_is_emission_factor_times_rider_trip_distances() {
        let drivers = vec![DriverBuilder::new("D").build()];
        let riders = vec![
            RiderBuilder::new("R1").build(),
            RiderBuilder::new("R2")
                .with_start(GeoPoint::new(0.0, 0.02))
                .with_destination(GeoPoint::new(1.0, 0.98))
                .build(),
        ];

        let outcome = FirstFitMatcher::default().form_groups(&drivers, &riders);
        let group = outcome.group_for("D").expect("group for D");

        let expected: f64 = riders.iter().map(|r| 0.12 * r.commuter.trip_distance_km()).sum();
        assert_eq!(group.riders, ["R1", "R2"]);
        assert!((group.carbon_saved_kg - expected).abs() < 1e-9);
    }

    #[test]
    fn emission_factor_comes_from_config() {
        let drivers = vec![DriverBuilder::new("D").build()];
        let riders = vec![RiderBuilder::new("R").build()];
        let matcher = FirstFitMatcher::new(MatchConfig::default().with_emission_factor(0.0));

        let outcome = matcher.form_groups(&drivers, &riders);

        assert_eq!(outcome.groups[0].carbon_saved_kg, 0.0);
    }

    #[test]
    fn riders_keep_input_order_within_a_group() {
        let drivers = vec![DriverBuilder::new("D").build()];
        let riders: Vec<_> = ["c", "a", "b"]
            .iter()
            .map(|name| RiderBuilder::new(name).build())
            .collect();

        let outcome = FirstFitMatcher::default().form_groups(&drivers, &riders);

        assert_eq!(outcome.groups[0].riders, ["c", "a", "b"]);
    }

    #[test]
    fn drivers_without_riders_are_dropped_and_order_is_kept() {
        let drivers = vec![
            DriverBuilder::new("late").with_time(hm(18, 0)).build(),
            DriverBuilder::new("first").build(),
            DriverBuilder::new("second").with_time(hm(9, 5)).build(),
        ];
        let riders = vec![RiderBuilder::new("R").build()];

        let outcome = FirstFitMatcher::default().form_groups(&drivers, &riders);

        let names: Vec<_> = outcome.groups.iter().map(|g| g.driver.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn shared_mode_lets_a_rider_join_several_groups() {
        let drivers = vec![DriverBuilder::new("D1").build(), DriverBuilder::new("D2").build()];
        let riders = vec![RiderBuilder::new("R").build()];

        let outcome = FirstFitMatcher::default().form_groups(&drivers, &riders);

        assert_eq!(outcome.groups.len(), 2);
        assert!(outcome.groups.iter().all(|g| g.riders == ["R"]));
    }

    #[test]
    fn exclusive_mode_gives_each_rider_to_the_first_driver() {
        let drivers = vec![DriverBuilder::new("D1").build(), DriverBuilder::new("D2").build()];
        let riders = vec![
            RiderBuilder::new("R1").build(),
            RiderBuilder::new("R2").build(),
        ];
        let matcher = FirstFitMatcher::new(
            MatchConfig::default().with_rider_assignment(RiderAssignment::Exclusive),
        );

        let outcome = matcher.form_groups(&drivers, &riders);

        assert_eq!(outcome.groups.len(), 1);
        assert_eq!(outcome.groups[0].driver, "D1");
        assert_eq!(outcome.groups[0].riders, ["R1", "R2"]);
    }

    #[test]
    fn invalid_records_are_skipped_without_stopping_the_run() {
        let drivers = vec![
            DriverBuilder::new("broken").with_max_detour_km(f64::NAN).build(),
            DriverBuilder::new("D").build(),
        ];
        let riders = vec![
            RiderBuilder::new("lost")
                .with_start(GeoPoint::new(f64::NAN, 0.0))
                .build(),
            RiderBuilder::new("R").build(),
        ];

        let outcome = FirstFitMatcher::default().form_groups(&drivers, &riders);

        assert_eq!(outcome.groups.len(), 1);
        assert_eq!(outcome.groups[0].riders, ["R"]);
        assert_eq!(outcome.skipped.len(), 2);
        assert_eq!(outcome.skipped[0].role, Role::Rider);
        assert_eq!(outcome.skipped[0].name, "lost");
        assert!(matches!(
            outcome.skipped[0].error,
            RecordError::InvalidLocation { endpoint: "start", .. }
        ));
        assert_eq!(outcome.skipped[1].role, Role::Driver);
        assert_eq!(outcome.skipped[1].name, "broken");
    }

    #[test]
    fn invalid_rider_is_reported_once_regardless_of_driver_count() {
        let drivers: Vec<_> = (0..3).map(|i| DriverBuilder::new(&format!("D{i}")).build()).collect();
        let riders = vec![RiderBuilder::new("").build()];

        let outcome = FirstFitMatcher::default().form_groups(&drivers, &riders);

        assert!(outcome.groups.is_empty());
        assert_eq!(outcome.skipped.len(), 1);
    }

    #[test]
    fn empty_inputs_produce_empty_outcome() {
        let outcome = FirstFitMatcher::default().form_groups(&[], &[]);
        assert_eq!(outcome, MatchOutcome::default());
    }
}
