// src/export/logic.rs

use crate::core::recap::RecapLogic;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, require_absolute};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecapExportRow;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date::month_name;
use rusqlite::Connection;
use std::path::Path;

/// Monthly recap export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the recap of `month`/`year` to `file`, which must be an
    /// absolute path. Returns the number of student rows written.
    pub fn export(
        conn: &Connection,
        format: ExportFormat,
        file: &str,
        month: u32,
        year: i32,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        require_absolute(path)?;

        let recap = RecapLogic::monthly(conn, month, year)?;
        ensure_writable(path, force)?;

        if recap.is_empty() {
            warning("No menu logs found for the selected month; writing an empty recap.");
        }

        match format {
            ExportFormat::Csv => {
                let rows: Vec<_> = recap.iter().map(RecapExportRow::labels).collect();
                export_csv(&rows, path)?
            }
            ExportFormat::Json => {
                let rows: Vec<_> = recap.iter().map(RecapExportRow::labels).collect();
                export_json(&rows, path)?
            }
            ExportFormat::Xlsx => {
                let rows: Vec<_> = recap.iter().map(RecapExportRow::labels).collect();
                export_xlsx(&rows, path)?
            }
            ExportFormat::Pdf => {
                let rows: Vec<_> = recap.iter().map(RecapExportRow::codes).collect();
                export_pdf(&rows, path, &pdf_title(month, year))?
            }
        }

        audit(
            conn,
            "export",
            format.as_str(),
            &format!("Recap {year}-{month:02} exported to {file}"),
        );

        Ok(recap.len())
    }
}

pub fn pdf_title(month: u32, year: i32) -> String {
    format!("Rekap SSB - {} {}", month_name(month), year)
}
