use super::outcome::{ImportSummary, RowOutcome};
use super::sheet::{SheetRow, pick};
use crate::core::action::ActionResult;
use crate::db::classes;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::class::normalize_teacher;
use rusqlite::Connection;

pub const NAME_COLUMNS: &[&str] = &["Nama Kelas", "name", "Kelas"];
pub const TEACHER_COLUMNS: &[&str] = &["Wali Kelas", "Wali", "homeroomTeacher"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRow {
    pub name: String,
    pub homeroom_teacher: Option<String>,
}

impl ClassRow {
    pub fn new(name: &str, teacher: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            homeroom_teacher: teacher.map(str::to_string),
        }
    }

    /// Trimmed copy of the row; `None` when the name is blank. A blank
    /// teacher means "not supplied".
    pub fn cleaned(&self) -> Option<ClassRow> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(ClassRow {
            name: name.to_string(),
            homeroom_teacher: normalize_teacher(self.homeroom_teacher.as_deref()),
        })
    }

    /// Rows without a class name are dropped.
    pub fn from_sheet(rows: &[SheetRow]) -> Vec<ClassRow> {
        rows.iter()
            .filter_map(|r| {
                ClassRow {
                    name: pick(r, NAME_COLUMNS)?,
                    homeroom_teacher: pick(r, TEACHER_COLUMNS),
                }
                .cleaned()
            })
            .collect()
    }
}

pub fn clean_rows(rows: &[ClassRow]) -> Vec<ClassRow> {
    rows.iter().filter_map(ClassRow::cleaned).collect()
}

fn reconcile(conn: &Connection, row: &ClassRow) -> AppResult<RowOutcome> {
    match classes::find_by_name(conn, &row.name)? {
        Some(existing) => match row.homeroom_teacher.as_deref() {
            Some(teacher) => {
                classes::update_teacher(conn, existing.id, teacher)?;
                Ok(RowOutcome::Updated)
            }
            None => Ok(RowOutcome::Unchanged),
        },
        None => {
            classes::insert_class(conn, &row.name, row.homeroom_teacher.as_deref())?;
            Ok(RowOutcome::Created)
        }
    }
}

/// Reconcile rows one at a time. A failing row is recorded and the rest
/// still run; nothing is rolled back. Blank-named rows are skipped silently.
pub fn reconcile_classes(conn: &Connection, rows: &[ClassRow]) -> ImportSummary {
    let mut summary = ImportSummary::default();
    for row in &clean_rows(rows) {
        let outcome = reconcile(conn, row).unwrap_or_else(|e| {
            RowOutcome::Skipped(format!("Failed to process class {}: {e}", row.name))
        });
        summary.push(row.name.clone(), outcome);
    }
    summary
}

pub fn import_classes(conn: &Connection, rows: &[ClassRow]) -> ActionResult {
    let rows = clean_rows(rows);
    if rows.is_empty() {
        return ActionResult::failed("Empty or invalid data.");
    }

    let summary = reconcile_classes(conn, &rows);
    let ok = summary.success_count();
    let errors = summary.errors();

    if ok == 0 && !errors.is_empty() {
        return ActionResult::failed(errors.join(", "));
    }

    audit(
        conn,
        "import",
        "classes",
        &format!(
            "{} created, {} updated, {} unchanged, {} failed",
            summary.count_of(&RowOutcome::Created),
            summary.count_of(&RowOutcome::Updated),
            summary.count_of(&RowOutcome::Unchanged),
            errors.len()
        ),
    );

    let message = (!errors.is_empty()).then(|| format!("Success: {ok}. Failed: {}", errors.len()));
    ActionResult::counted(ok)
        .with_message(message)
        .with_errors(errors)
}
