// src/export/template.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_export_success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TemplateKind {
    Classes,
    Students,
}

impl TemplateKind {
    pub fn headers(&self) -> [&'static str; 2] {
        match self {
            TemplateKind::Classes => ["Nama Kelas", "Wali Kelas"],
            TemplateKind::Students => ["Nama Siswa", "Kelas"],
        }
    }

    fn samples(&self) -> [[&'static str; 2]; 2] {
        match self {
            TemplateKind::Classes => [["7A", "Ibu Sari"], ["7B", "Bapak Joko"]],
            TemplateKind::Students => [["Budi Santoso", "7A"], ["Siti Aminah", "7B"]],
        }
    }
}

/// Write a CSV import template: canonical headers plus two sample rows.
pub fn write_template(kind: TemplateKind, path: &Path, force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(kind.headers())?;
    for sample in kind.samples() {
        wtr.write_record(sample)?;
    }
    wtr.flush()?;

    notify_export_success("Template", path);
    Ok(())
}
