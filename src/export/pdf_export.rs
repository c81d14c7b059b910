// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{RecapExportRow, get_headers, rows_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::PdfTable;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Export PDF: landscape page, compact day codes.
pub(crate) fn export_pdf(rows: &[RecapExportRow], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
    let data_vec = rows_to_table(rows);

    let mut pdf = PdfTable::landscape()
        .with_legend("L = Lengkap   K = Kurang   T = Tidak Membawa   - = tidak ada data");
    pdf.write_table(title, &headers, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
