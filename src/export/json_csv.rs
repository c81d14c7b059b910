// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{RecapExportRow, get_headers};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed: an array of row objects.
pub(crate) fn export_json(rows: &[RecapExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, header row first.
pub(crate) fn export_csv(rows: &[RecapExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for row in rows {
        wtr.write_record(row.to_row())?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
