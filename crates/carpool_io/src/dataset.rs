//! Trip request datasets.
//!
//! A dataset is a CSV file with a header row and one person per row. Missing
//! required columns abort the load; a row that fails to parse or validate is
//! skipped and reported in [`Dataset::skipped`], and loading carries on.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use carpool_core::model::{Commuter, Driver, PersonRecord, Rider, Role};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{DatasetError, ExportError, RowError};
use crate::export::writer_utils::create_output_file;
use crate::parse::{parse_coordinates, parse_flag, parse_number, parse_role, parse_time_of_travel};

pub const REQUIRED_COLUMNS: [&str; 9] = [
    "driver_rider",
    "name",
    "start_location",
    "destination_location",
    "time_of_travel",
    "gender",
    "max_detour_distance",
    "same_gender",
    "non_smoking",
];

const TIME_OUTPUT_FORMAT: &str = "%H:%M:%S";

/// Loaded records, in file order within each role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub drivers: Vec<Driver>,
    pub riders: Vec<Rider>,
    pub skipped: Vec<SkippedRow>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.drivers.len() + self.riders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty() && self.riders.is_empty()
    }
}

/// A row left out of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the file (the header is line 1).
    pub line: u64,
    /// The row's name, when it could be read.
    pub name: Option<String>,
    pub error: RowError,
}

/// Every cell is optional at this stage so blanks become typed errors.
#[derive(Debug, Deserialize)]
struct RawRow {
    driver_rider: Option<String>,
    name: Option<String>,
    start_location: Option<String>,
    destination_location: Option<String>,
    time_of_travel: Option<String>,
    gender: Option<String>,
    max_detour_distance: Option<String>,
    same_gender: Option<String>,
    non_smoking: Option<String>,
}

fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, RowError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RowError::MissingField(field)),
    }
}

impl RawRow {
    fn into_record(self) -> Result<PersonRecord, RowError> {
        let role = parse_role(required("driver_rider", &self.driver_rider)?)?;
        let commuter = Commuter {
            name: required("name", &self.name)?.to_owned(),
            start: parse_coordinates("start_location", required("start_location", &self.start_location)?)?,
            destination: parse_coordinates(
                "destination_location",
                required("destination_location", &self.destination_location)?,
            )?,
            time_of_travel: parse_time_of_travel(required("time_of_travel", &self.time_of_travel)?)?,
            gender: required("gender", &self.gender)?.to_owned(),
            non_smoking: parse_flag("non_smoking", required("non_smoking", &self.non_smoking)?)?,
        };

        let record = match role {
            Role::Driver => PersonRecord::Driver(Driver {
                commuter,
                max_detour_km: parse_number(
                    "max_detour_distance",
                    required("max_detour_distance", &self.max_detour_distance)?,
                )?,
                same_gender: parse_flag("same_gender", required("same_gender", &self.same_gender)?)?,
            }),
            Role::Rider => PersonRecord::Rider(Rider { commuter }),
        };

        match &record {
            PersonRecord::Driver(driver) => driver.validate()?,
            PersonRecord::Rider(rider) => rider.validate()?,
        }
        Ok(record)
    }
}

/// Load a dataset from a CSV file.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = read_dataset(file)?;
    info!(
        path = %path.display(),
        drivers = dataset.drivers.len(),
        riders = dataset.riders.len(),
        skipped = dataset.skipped.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Read a dataset from any CSV source.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DatasetError::MissingColumn(column));
        }
    }
    let name_idx = headers.iter().position(|header| header == "name");

    let mut dataset = Dataset::default();
    let mut seen_names = HashSet::new();
    for (idx, result) in rdr.records().enumerate() {
        // Header is line 1; fall back to the record index when positions are unavailable.
        let fallback_line = idx as u64 + 2;
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                let line = err.position().map_or(fallback_line, |pos| pos.line());
                warn!(line, error = %err, "skipping unreadable row");
                dataset.skipped.push(SkippedRow {
                    line,
                    name: None,
                    error: RowError::Malformed(err.to_string()),
                });
                continue;
            }
        };
        let line = record.position().map_or(fallback_line, |pos| pos.line());
        let name = name_idx
            .and_then(|i| record.get(i))
            .filter(|name| !name.is_empty())
            .map(str::to_owned);

        let parsed = record
            .deserialize::<RawRow>(Some(&headers))
            .map_err(|err| RowError::Malformed(err.to_string()))
            .and_then(RawRow::into_record);

        match parsed {
            Ok(person) => {
                if !seen_names.insert(person.name().to_owned()) {
                    warn!(line, name = person.name(), "duplicate name in dataset");
                }
                match person {
                    PersonRecord::Driver(driver) => dataset.drivers.push(driver),
                    PersonRecord::Rider(rider) => dataset.riders.push(rider),
                }
            }
            Err(error) => {
                warn!(line, name = name.as_deref().unwrap_or(""), %error, "skipping row");
                dataset.skipped.push(SkippedRow { line, name, error });
            }
        }
    }

    Ok(dataset)
}

/// Write records in the layout [`load_dataset`] reads.
pub fn write_dataset_csv(path: impl AsRef<Path>, records: &[PersonRecord]) -> Result<(), ExportError> {
    let file = create_output_file(path)?;
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(REQUIRED_COLUMNS)?;

    for record in records {
        let commuter = record.commuter();
        let (max_detour, same_gender) = match record {
            PersonRecord::Driver(driver) => (driver.max_detour_km.to_string(), driver.same_gender.to_string()),
            PersonRecord::Rider(_) => (String::new(), String::new()),
        };
        wtr.write_record([
            &record.role().to_string(),
            &commuter.name,
            &commuter.start.to_string(),
            &commuter.destination.to_string(),
            &commuter.time_of_travel.format(TIME_OUTPUT_FORMAT).to_string(),
            &commuter.gender,
            &max_detour,
            &same_gender,
            &commuter.non_smoking.to_string(),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
