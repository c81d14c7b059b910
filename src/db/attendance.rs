use crate::errors::AppResult;
use crate::models::AttendanceMark;
use crate::utils::date::to_db;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};

pub fn find_event(conn: &Connection, date: &NaiveDate) -> AppResult<Option<i64>> {
    Ok(conn
        .query_row(
            "SELECT id FROM breakfast_events WHERE date = ?1",
            [to_db(date)],
            |r| r.get(0),
        )
        .optional()?)
}

/// Make sure exactly one breakfast event exists for `date` and return its id.
/// An existing event is left as is.
pub fn ensure_event(conn: &Connection, date: &NaiveDate) -> AppResult<i64> {
    if let Some(id) = find_event(conn, date)? {
        return Ok(id);
    }
    conn.execute("INSERT INTO breakfast_events (date) VALUES (?1)", [to_db(date)])?;
    Ok(conn.last_insert_rowid())
}

pub fn upsert_attendance(conn: &Connection, event_id: i64, mark: &AttendanceMark) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO breakfast_attendance (breakfast_event_id, student_id, is_present)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(breakfast_event_id, student_id) DO UPDATE SET
             is_present = excluded.is_present",
    )?;
    stmt.execute(params![event_id, mark.student_id, mark.is_present])?;
    Ok(())
}

/// Attendance recorded for the event on `date`, by student id.
pub fn load_for_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<AttendanceMark>> {
    let mut stmt = conn.prepare(
        "SELECT a.student_id, a.is_present
         FROM breakfast_attendance a
         JOIN breakfast_events e ON e.id = a.breakfast_event_id
         WHERE e.date = ?1
         ORDER BY a.student_id ASC",
    )?;
    let rows = stmt.query_map([to_db(date)], |row| {
        Ok(AttendanceMark::new(row.get(0)?, row.get(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
