use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::time::DEFAULT_TIME_THRESHOLD_MINUTES;

/// Emission avoided per rider-kilometer shared (120 g CO2/km).
pub const DEFAULT_EMISSION_FACTOR_KG_PER_KM: f64 = 0.12;

/// Whether a rider may be placed in more than one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiderAssignment {
    /// Every driver scans every rider; a rider can join several groups.
    #[default]
    Shared,
    /// A rider joins the first group that accepts them and is skipped afterwards.
    Exclusive,
}

/// Parameters for a matching run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Maximum gap between driver and rider times of travel, in minutes.
    pub time_threshold_minutes: u32,
    /// kg CO2 credited per kilometer of a matched rider's own trip.
    pub emission_factor_kg_per_km: f64,
    pub rider_assignment: RiderAssignment,
    /// Compare times on the 24h clock face instead of within a single day.
    pub wrap_midnight: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            time_threshold_minutes: DEFAULT_TIME_THRESHOLD_MINUTES,
            emission_factor_kg_per_km: DEFAULT_EMISSION_FACTOR_KG_PER_KM,
            rider_assignment: RiderAssignment::Shared,
            wrap_midnight: false,
        }
    }
}

impl MatchConfig {
    pub fn with_time_threshold_minutes(mut self, minutes: u32) -> Self {
        self.time_threshold_minutes = minutes;
        self
    }

    pub fn with_emission_factor(mut self, kg_per_km: f64) -> Self {
        self.emission_factor_kg_per_km = kg_per_km;
        self
    }

    pub fn with_rider_assignment(mut self, assignment: RiderAssignment) -> Self {
        self.rider_assignment = assignment;
        self
    }

    pub fn with_wrap_midnight(mut self, wrap: bool) -> Self {
        self.wrap_midnight = wrap;
        self
    }

    pub fn time_threshold(&self) -> Duration {
        Duration::minutes(i64::from(self.time_threshold_minutes))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.emission_factor_kg_per_km.is_finite() || self.emission_factor_kg_per_km < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "emission_factor_kg_per_km must be finite and non-negative, got {}",
                self.emission_factor_kg_per_km
            )));
        }
        Ok(())
    }

    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}
