// src/export/model.rs

use crate::models::StudentRecap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Recap sheets always carry 31 day columns, whatever the month length.
pub const DAY_COLUMNS: u32 = 31;

/// Flat recap row: student, class, and one cell per day of the month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecapExportRow {
    pub student_name: String,
    pub class_name: String,
    pub days: Vec<String>,
}

impl RecapExportRow {
    /// Row with the long labels (Lengkap / Kurang / Tidak Membawa / -).
    pub fn labels(r: &StudentRecap) -> Self {
        Self {
            student_name: r.student_name.clone(),
            class_name: r.class_name.clone(),
            days: (1..=DAY_COLUMNS).map(|d| r.label(d).to_string()).collect(),
        }
    }

    /// Row with one-letter codes, for the PDF.
    pub fn codes(r: &StudentRecap) -> Self {
        Self {
            student_name: r.student_name.clone(),
            class_name: r.class_name.clone(),
            days: (1..=DAY_COLUMNS).map(|d| r.code(d).to_string()).collect(),
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(self.days.len() + 2);
        row.push(self.student_name.clone());
        row.push(self.class_name.clone());
        row.extend(self.days.iter().cloned());
        row
    }
}

/// JSON object keyed by the sheet headers, in column order.
impl Serialize for RecapExportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len() + 2))?;
        map.serialize_entry("Nama Siswa", &self.student_name)?;
        map.serialize_entry("Kelas", &self.class_name)?;
        for (i, v) in self.days.iter().enumerate() {
            map.serialize_entry(&(i + 1).to_string(), v)?;
        }
        map.end()
    }
}

/// Header for CSV / XLSX / PDF
pub fn get_headers() -> Vec<String> {
    let mut headers = vec!["Nama Siswa".to_string(), "Kelas".to_string()];
    headers.extend((1..=DAY_COLUMNS).map(|d| d.to_string()));
    headers
}

pub(crate) fn rows_to_table(rows: &[RecapExportRow]) -> Vec<Vec<String>> {
    rows.iter().map(RecapExportRow::to_row).collect()
}
