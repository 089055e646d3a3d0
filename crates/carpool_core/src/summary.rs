//! Aggregate statistics for a finished grouping run.

use std::collections::HashMap;

use serde::Serialize;

use crate::matching::MatchOutcome;
use crate::model::{Driver, Rider, Role};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub drivers_considered: usize,
    pub riders_considered: usize,
    pub groups_formed: usize,
    /// Number of (driver, rider) pairs across all groups.
    pub matched_pairs: usize,
    pub distinct_riders_matched: usize,
    /// Riders placed in more than one group (only possible in shared mode).
    pub riders_in_multiple_groups: usize,
    /// Valid drivers that ended up without a group.
    pub unmatched_drivers: usize,
    /// Sum of the unrounded group totals (kg CO2).
    pub total_carbon_saved_kg: f64,
    pub skipped_records: usize,
}

impl MatchSummary {
    pub fn from_outcome(drivers: &[Driver], riders: &[Rider], outcome: &MatchOutcome) -> Self {
        // Keyed by position, since two riders may share a name.
        let mut memberships: HashMap<usize, usize> = HashMap::new();
        for group in &outcome.groups {
            for &index in &group.rider_indices {
                *memberships.entry(index).or_default() += 1;
            }
        }

        let skipped_drivers = outcome
            .skipped
            .iter()
            .filter(|record| record.role == Role::Driver)
            .count();

        Self {
            drivers_considered: drivers.len(),
            riders_considered: riders.len(),
            groups_formed: outcome.groups.len(),
            matched_pairs: memberships.values().sum(),
            distinct_riders_matched: memberships.len(),
            riders_in_multiple_groups: memberships.values().filter(|&&count| count > 1).count(),
            unmatched_drivers: drivers
                .len()
                .saturating_sub(skipped_drivers + outcome.groups.len()),
            total_carbon_saved_kg: outcome.groups.iter().map(|g| g.carbon_saved_kg).sum(),
            skipped_records: outcome.skipped.len(),
        }
    }
}
