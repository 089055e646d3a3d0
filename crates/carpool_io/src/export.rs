//! Group export.
//!
//! Each group is flattened into one row per rider. The carbon column holds the
//! GROUP total rounded to two decimals, repeated on every rider row of that
//! group; it is not split per rider.

use std::path::Path;

use carpool_core::CarpoolGroup;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::ExportError;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/writer_utils.rs"]
pub(crate) mod writer_utils;

pub const GROUP_COLUMNS: [&str; 7] = [
    "Group ID",
    "Driver",
    "Rider",
    "Start Location",
    "Destination Location",
    "Travel Time",
    "Carbon Footprint Saved (kg CO2)",
];

const TRAVEL_TIME_FORMAT: &str = "%H:%M:%S";

/// One exported (driver, rider) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    #[serde(rename = "Group ID")]
    pub group_id: usize,
    #[serde(rename = "Driver")]
    pub driver: String,
    #[serde(rename = "Rider")]
    pub rider: String,
    #[serde(rename = "Start Location")]
    pub start_location: String,
    #[serde(rename = "Destination Location")]
    pub destination_location: String,
    #[serde(rename = "Travel Time")]
    pub travel_time: String,
    #[serde(rename = "Carbon Footprint Saved (kg CO2)")]
    pub carbon_saved_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// Pick a format from the file extension; anything but `.json` is CSV.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }
}

/// Flatten groups into export rows. Group IDs are 1-based in group order.
pub fn group_rows(groups: &[CarpoolGroup]) -> Vec<GroupRow> {
    groups
        .iter()
        .enumerate()
        .flat_map(|(idx, group)| {
            let carbon_saved_kg = group.rounded_carbon_saved_kg();
            let travel_time = group.time.format(TRAVEL_TIME_FORMAT).to_string();
            group.riders.iter().map(move |rider| GroupRow {
                group_id: idx + 1,
                driver: group.driver.clone(),
                rider: rider.clone(),
                start_location: group.start.to_string(),
                destination_location: group.destination.to_string(),
                travel_time: travel_time.clone(),
                carbon_saved_kg,
            })
        })
        .collect()
}

/// Export groups to CSV with the [`GROUP_COLUMNS`] header.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn export_to_csv(groups: &[CarpoolGroup], path: impl AsRef<Path>) -> Result<(), ExportError> {
    let rows = group_rows(groups);
    let file = writer_utils::create_output_file(path)?;
    csv::export_to_csv_impl(&rows, file)
}

/// Export groups to a JSON array of row objects keyed by the column names.
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization fails.
pub fn export_to_json(groups: &[CarpoolGroup], path: impl AsRef<Path>) -> Result<(), ExportError> {
    let rows = group_rows(groups);
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(&rows, file)
}

/// Export groups in the given format. An empty group list still writes a file.
pub fn export_groups(
    groups: &[CarpoolGroup],
    path: impl AsRef<Path>,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    if groups.is_empty() {
        warn!(path = %path.display(), "no carpool groups to export");
    }
    match format {
        ExportFormat::Csv => export_to_csv(groups, path)?,
        ExportFormat::Json => export_to_json(groups, path)?,
    }
    info!(path = %path.display(), groups = groups.len(), ?format, "groups saved");
    Ok(())
}
