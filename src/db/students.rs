use crate::db::placeholders;
use crate::errors::AppResult;
use crate::models::Student;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};

const SELECT_STUDENTS: &str = "SELECT s.id, s.name, s.class_id, c.name AS class_name
     FROM students s
     JOIN classes c ON c.id = s.class_id";

pub fn map_row(row: &Row) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get("id")?,
        name: row.get("name")?,
        class_id: row.get("class_id")?,
        class_name: row.get("class_name")?,
    })
}

pub fn insert_student(conn: &Connection, name: &str, class_id: i64) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO students (name, class_id) VALUES (?1, ?2)",
        params![name, class_id],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert many students with one prepared statement. The caller owns the
/// transaction, so a failure on any row leaves nothing behind.
pub fn insert_many(conn: &Connection, rows: &[(String, i64)]) -> AppResult<usize> {
    let mut stmt = conn.prepare_cached("INSERT INTO students (name, class_id) VALUES (?1, ?2)")?;
    for (name, class_id) in rows {
        stmt.execute(params![name, class_id])?;
    }
    Ok(rows.len())
}

pub fn update_student(conn: &Connection, id: i64, name: &str, class_id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE students SET name = ?1, class_id = ?2 WHERE id = ?3",
        params![name, class_id, id],
    )?;
    Ok(n)
}

pub fn find_by_id(conn: &Connection, id: i64) -> AppResult<Option<Student>> {
    let sql = format!("{SELECT_STUDENTS} WHERE s.id = ?1");
    Ok(conn.query_row(&sql, [id], map_row).optional()?)
}

/// Students ordered by class name then student name, optionally limited to
/// one class.
pub fn list_students(conn: &Connection, class_id: Option<i64>) -> AppResult<Vec<Student>> {
    let mut out = Vec::new();
    match class_id {
        Some(cid) => {
            let sql = format!("{SELECT_STUDENTS} WHERE s.class_id = ?1 ORDER BY s.name ASC, s.id ASC");
            let mut stmt = conn.prepare(&sql)?;
            for r in stmt.query_map([cid], map_row)? {
                out.push(r?);
            }
        }
        None => {
            let sql = format!("{SELECT_STUDENTS} ORDER BY c.name ASC, s.name ASC, s.id ASC");
            let mut stmt = conn.prepare(&sql)?;
            for r in stmt.query_map([], map_row)? {
                out.push(r?);
            }
        }
    }
    Ok(out)
}

pub fn delete_student(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM students WHERE id = ?1", [id])?)
}

pub fn delete_students(conn: &Connection, ids: &[i64]) -> AppResult<usize> {
    if ids.is_empty() {
        return Ok(0);
    }
    let sql = format!(
        "DELETE FROM students WHERE id IN ({})",
        placeholders(ids.len())
    );
    Ok(conn.execute(&sql, params_from_iter(ids.iter()))?)
}

pub fn delete_all(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM students", [])?)
}

pub fn count(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM students", [], |r| r.get(0))?)
}
