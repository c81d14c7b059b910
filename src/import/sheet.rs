use crate::errors::{AppError, AppResult};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// One data row of a spreadsheet, keyed by header name.
pub type SheetRow = HashMap<String, String>;

/// Read a `.csv` or `.json` spreadsheet export.
pub fn read_rows(path: &Path) -> AppResult<Vec<SheetRow>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => read_csv(fs::File::open(path)?),
        "json" => read_json(&fs::read_to_string(path)?),
        _ => Err(AppError::InvalidImportFile(format!(
            "{} (expected .csv or .json)",
            path.display()
        ))),
    }
}

pub fn read_csv<R: Read>(reader: R) -> AppResult<Vec<SheetRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row: SheetRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        out.push(row);
    }
    Ok(out)
}

/// A JSON array of objects. Numbers and booleans become their text form,
/// nulls are left out.
pub fn read_json(content: &str) -> AppResult<Vec<SheetRow>> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Array(items) = value else {
        return Err(AppError::InvalidImportFile(
            "JSON import must be an array of objects".to_string(),
        ));
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let Value::Object(map) = item else {
            continue;
        };
        let row: SheetRow = map
            .into_iter()
            .filter_map(|(k, v)| match v {
                Value::String(s) => Some((k, s)),
                Value::Number(n) => Some((k, n.to_string())),
                Value::Bool(b) => Some((k, b.to_string())),
                _ => None,
            })
            .collect();
        out.push(row);
    }
    Ok(out)
}

/// Value of the first alias that is present with a non-blank value.
pub fn pick(row: &SheetRow, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|a| row.get(*a))
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .map(str::to_string)
}
