//! File adapters for the carpool matcher.
//!
//! - [`dataset`]: load trip requests from CSV into typed drivers and riders,
//!   skipping (and reporting) rows that cannot be parsed
//! - [`parse`]: cell-level parsers for coordinates, times, flags and roles
//! - [`export`]: flatten groups into one row per (driver, rider) pair and
//!   write them as CSV or JSON

pub mod dataset;
pub mod error;
pub mod export;
pub mod parse;

pub use dataset::{load_dataset, read_dataset, write_dataset_csv, Dataset, SkippedRow};
pub use error::{DatasetError, ExportError, RowError};
pub use export::{export_groups, export_to_csv, export_to_json, group_rows, ExportFormat, GroupRow};
