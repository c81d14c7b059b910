use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};

const DB_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a user supplied `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DB_FORMAT).map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Date as stored in the database (day granularity).
pub fn to_db(d: &NaiveDate) -> String {
    d.format(DB_FORMAT).to_string()
}

pub fn parse_db_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DB_FORMAT).ok()
}

/// Inclusive bounds of a calendar month: the first day and the day before
/// the first day of the next month.
pub fn month_bounds(month: u32, year: i32) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidMonth(format!("{year}-{month:02}"));

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(invalid)?;
    Ok((first, last))
}

pub fn days_in_month(month: u32, year: i32) -> AppResult<u32> {
    Ok(month_bounds(month, year)?.1.day())
}

/// Indonesian month name, used in report titles.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Januari",
        2 => "Februari",
        3 => "Maret",
        4 => "April",
        5 => "Mei",
        6 => "Juni",
        7 => "Juli",
        8 => "Agustus",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        12 => "Desember",
        _ => "",
    }
}
