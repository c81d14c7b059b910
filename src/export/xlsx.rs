// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{RecapExportRow, get_headers};
use crate::export::notify_export_success;
use crate::models::day_status::{DayStatus, NO_LOG_LABEL};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub const SHEET_NAME: &str = "Rekap Bulanan";

/// Export XLSX with a styled header, banded rows and auto column widths.
/// An empty recap still produces a sheet with the header row.
pub(crate) fn export_xlsx(rows: &[RecapExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_io_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 2).map_err(to_io_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(h.as_str())).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in r.to_row().iter().enumerate() {
            let v = value.as_str();
            write_xlsx_cell(worksheet, row, col as u16, v, band_color, col >= 2)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Font color of a day cell, keyed on its label.
fn status_color(label: &str) -> Option<Color> {
    [DayStatus::Complete, DayStatus::Partial, DayStatus::None]
        .into_iter()
        .find(|s| s.label() == label)
        .map(|s| match s {
            DayStatus::Complete => Color::RGB(0x1E7B34),
            DayStatus::Partial => Color::RGB(0xB7791F),
            DayStatus::None => Color::RGB(0xC53030),
        })
}

/// Write one cell. Day cells are centered and colored by status.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
    is_day: bool,
) -> AppResult<()> {
    let mut fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if is_day {
        fmt = fmt.set_align(FormatAlign::Center);
        if s == NO_LOG_LABEL {
            fmt = fmt.set_font_color(Color::RGB(0x808080));
        } else if let Some(color) = status_color(s) {
            fmt = fmt.set_font_color(color);
        }
    }

    worksheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_io_app_error)?;

    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
