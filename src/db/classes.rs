use crate::db::placeholders;
use crate::errors::AppResult;
use crate::models::{Class, ClassSummary};
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use std::collections::HashMap;

pub fn map_row(row: &Row) -> rusqlite::Result<Class> {
    Ok(Class {
        id: row.get("id")?,
        name: row.get("name")?,
        homeroom_teacher: row.get("homeroom_teacher")?,
    })
}

pub fn insert_class(conn: &Connection, name: &str, teacher: Option<&str>) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO classes (name, homeroom_teacher) VALUES (?1, ?2)",
        params![name, teacher],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_class(
    conn: &Connection,
    id: i64,
    name: &str,
    teacher: Option<&str>,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE classes SET name = ?1, homeroom_teacher = ?2 WHERE id = ?3",
        params![name, teacher, id],
    )?;
    Ok(n)
}

pub fn update_teacher(conn: &Connection, id: i64, teacher: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE classes SET homeroom_teacher = ?1 WHERE id = ?2",
        params![teacher, id],
    )?;
    Ok(())
}

pub fn find_by_id(conn: &Connection, id: i64) -> AppResult<Option<Class>> {
    let class = conn
        .query_row(
            "SELECT id, name, homeroom_teacher FROM classes WHERE id = ?1",
            [id],
            map_row,
        )
        .optional()?;
    Ok(class)
}

/// Exact (case-sensitive) lookup on the unique name.
pub fn find_by_name(conn: &Connection, name: &str) -> AppResult<Option<Class>> {
    let class = conn
        .query_row(
            "SELECT id, name, homeroom_teacher FROM classes WHERE name = ?1",
            [name],
            map_row,
        )
        .optional()?;
    Ok(class)
}

pub fn list_classes(conn: &Connection) -> AppResult<Vec<ClassSummary>> {
    let mut stmt = conn.prepare(
        "SELECT c.id, c.name, c.homeroom_teacher, COUNT(s.id) AS student_count
         FROM classes c
         LEFT JOIN students s ON s.class_id = c.id
         GROUP BY c.id
         ORDER BY c.name ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(ClassSummary {
            class: map_row(row)?,
            student_count: row.get("student_count")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Lower-cased class name → id, for case-insensitive resolution.
pub fn name_index(conn: &Connection) -> AppResult<HashMap<String, i64>> {
    let mut stmt = conn.prepare("SELECT id, name FROM classes")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(1)?.to_lowercase(), row.get::<_, i64>(0)?))
    })?;

    let mut out = HashMap::new();
    for r in rows {
        let (name, id) = r?;
        out.insert(name, id);
    }
    Ok(out)
}

pub fn delete_class(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM classes WHERE id = ?1", [id])?)
}

pub fn delete_classes(conn: &Connection, ids: &[i64]) -> AppResult<usize> {
    if ids.is_empty() {
        return Ok(0);
    }
    let sql = format!(
        "DELETE FROM classes WHERE id IN ({})",
        placeholders(ids.len())
    );
    Ok(conn.execute(&sql, params_from_iter(ids.iter()))?)
}

pub fn delete_all(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM classes", [])?)
}

pub fn count(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM classes", [], |r| r.get(0))?)
}
