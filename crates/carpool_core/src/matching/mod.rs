pub mod first_fit;
pub mod predicate;
pub mod types;

pub use first_fit::FirstFitMatcher;
pub use predicate::{check_compatibility, Incompatibility};
pub use types::{round_to_cents, CarpoolGroup, MatchOutcome, SkippedRecord};
