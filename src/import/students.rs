use super::outcome::{ImportSummary, RowOutcome};
use super::sheet::{SheetRow, pick};
use crate::core::action::ActionResult;
use crate::db::log::audit;
use crate::db::{classes, students};
use crate::errors::AppResult;
use rusqlite::Connection;

pub const NAME_COLUMNS: &[&str] = &["Nama Siswa", "Nama", "name"];
pub const CLASS_COLUMNS: &[&str] = &["Kelas", "Class", "class", "className"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub name: String,
    pub class_name: String,
}

impl StudentRow {
    pub fn new(name: &str, class_name: &str) -> Self {
        Self {
            name: name.to_string(),
            class_name: class_name.to_string(),
        }
    }

    /// Rows missing either the student name or the class are dropped.
    pub fn from_sheet(rows: &[SheetRow]) -> Vec<StudentRow> {
        rows.iter()
            .filter_map(|r| {
                Some(StudentRow {
                    name: pick(r, NAME_COLUMNS)?,
                    class_name: pick(r, CLASS_COLUMNS)?,
                })
            })
            .collect()
    }
}

/// Match every row against the class index. Resolvable rows come back as
/// `(name, class_id)` pairs; the summary marks them Created ahead of the
/// insert.
fn plan(conn: &Connection, rows: &[StudentRow]) -> AppResult<(Vec<(String, i64)>, ImportSummary)> {
    let index = classes::name_index(conn)?;
    let mut to_create = Vec::new();
    let mut summary = ImportSummary::default();

    for row in rows {
        match index.get(&row.class_name.trim().to_lowercase()) {
            Some(class_id) => {
                to_create.push((row.name.trim().to_string(), *class_id));
                summary.push(row.name.clone(), RowOutcome::Created);
            }
            None => summary.push(
                row.name.clone(),
                RowOutcome::Skipped(format!(
                    "Class '{}' not found for student '{}'",
                    row.class_name, row.name
                )),
            ),
        }
    }

    Ok((to_create, summary))
}

/// Insert every resolvable student in one transaction. Unresolvable rows
/// are reported; a failed batch inserts nothing.
pub fn import_students(conn: &mut Connection, rows: &[StudentRow]) -> ActionResult {
    let res = (|| -> AppResult<(usize, Vec<String>)> {
        let (to_create, summary) = plan(conn, rows)?;
        let tx = conn.transaction()?;
        let inserted = students::insert_many(&tx, &to_create)?;
        tx.commit()?;
        Ok((inserted, summary.errors()))
    })();

    ActionResult::guard(res, "Failed to import student data.", |(n, errors)| {
        audit(
            conn,
            "import",
            "students",
            &format!("{n} students created, {} rows rejected", errors.len()),
        );
        ActionResult::counted(n).with_errors(errors)
    })
}
