use super::{GroupRow, GROUP_COLUMNS};
use crate::error::ExportError;

pub(crate) fn export_to_csv_impl(rows: &[GroupRow], file: std::fs::File) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(file);

    // Written explicitly so an empty export still carries the header.
    wtr.write_record(GROUP_COLUMNS)?;

    for row in rows {
        wtr.write_record([
            &row.group_id.to_string(),
            &row.driver,
            &row.rider,
            &row.start_location,
            &row.destination_location,
            &row.travel_time,
            &format!("{:.2}", row.carbon_saved_kg),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
