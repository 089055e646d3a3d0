use std::io::{BufWriter, Write};

use super::GroupRow;
use crate::error::ExportError;

pub(crate) fn export_to_json_impl(rows: &[GroupRow], file: std::fs::File) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.flush().map_err(serde_json::Error::io)?;
    Ok(())
}
