//! Carpool matching core: typed trip records, geodesic distance, travel-time
//! compatibility and first-fit grouping of riders into driver-led carpools.
//!
//! # Quick Start
//!
//! ```no_run
//! use carpool_core::{FirstFitMatcher, MatchConfig, MatchSummary};
//! use carpool_core::synthetic::{generate_dataset, GeneratorParams};
//! use carpool_core::model::split_by_role;
//!
//! let records = generate_dataset(&GeneratorParams::default().with_seed(7));
//! let (drivers, riders) = split_by_role(records);
//!
//! let matcher = FirstFitMatcher::new(MatchConfig::default());
//! let outcome = matcher.form_groups(&drivers, &riders);
//! let summary = MatchSummary::from_outcome(&drivers, &riders, &outcome);
//! println!("{} groups, {:.2} kg CO2 saved", summary.groups_formed, summary.total_carbon_saved_kg);
//! ```
//!
//! # Modules
//!
//! - [`geo`]: `GeoPoint` and ellipsoidal distance
//! - [`time`]: travel-time gap and compatibility window
//! - [`model`]: drivers, riders and record validation
//! - [`config`]: `MatchConfig` and the rider assignment mode
//! - [`matching`]: the compatibility predicate and the first-fit grouping pass
//! - [`summary`]: aggregate statistics for a finished run
//! - [`synthetic`]: seeded dataset generation for demos and benchmarks

pub mod config;
pub mod error;
pub mod geo;
pub mod matching;
pub mod model;
pub mod summary;
pub mod synthetic;
pub mod time;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use config::{MatchConfig, RiderAssignment};
pub use error::{ConfigError, RecordError};
pub use geo::GeoPoint;
pub use matching::{CarpoolGroup, FirstFitMatcher, Incompatibility, MatchOutcome, SkippedRecord};
pub use model::{Commuter, Driver, PersonRecord, Rider, Role};
pub use summary::MatchSummary;
