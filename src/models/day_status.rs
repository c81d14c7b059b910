use crate::models::menu::MenuItems;
use serde::Serialize;

/// Classification of one daily log in the monthly recap.
///
/// Only the five menu flags are considered; the `keterangan` status of the
/// log does not take part, so a "Tidak Masuk" log with every flag false is
/// reported as `None` just like any other empty log.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Complete,
    Partial,
    None,
}

impl DayStatus {
    pub fn classify(items: &MenuItems) -> Self {
        match items.count() {
            5 => DayStatus::Complete,
            0 => DayStatus::None,
            _ => DayStatus::Partial,
        }
    }

    /// Label used in spreadsheet exports.
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::Complete => "Lengkap",
            DayStatus::Partial => "Kurang",
            DayStatus::None => "Tidak Membawa",
        }
    }

    /// One-letter code used where space is tight (PDF, console).
    pub fn code(&self) -> &'static str {
        match self {
            DayStatus::Complete => "L",
            DayStatus::Partial => "K",
            DayStatus::None => "T",
        }
    }
}

/// Cell text for a day without any log.
pub const NO_LOG_LABEL: &str = "-";
