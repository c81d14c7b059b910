use crate::errors::{AppError, AppResult};
use crate::models::{DailyLogEntry, Keterangan, MenuItems};
use crate::utils::date::{parse_db_date, to_db};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};

/// A log joined with its student and class names, as the recap needs it.
#[derive(Debug, Clone)]
pub struct LogWithStudent {
    pub student_id: i64,
    pub student_name: String,
    pub class_name: String,
    pub date: NaiveDate,
    pub items: MenuItems,
}

fn map_items(row: &Row) -> rusqlite::Result<MenuItems> {
    Ok(MenuItems {
        nasi: row.get("nasi")?,
        lauk: row.get("lauk")?,
        sayur: row.get("sayur")?,
        buah: row.get("buah")?,
        minum: row.get("minum")?,
    })
}

fn map_date(row: &Row) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get("date")?;
    parse_db_date(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.clone())),
        )
    })
}

/// Insert or overwrite the log of (student, day).
pub fn upsert_log(conn: &Connection, entry: &DailyLogEntry) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO daily_menu_logs (student_id, date, nasi, lauk, sayur, buah, minum, keterangan)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(student_id, date) DO UPDATE SET
             nasi = excluded.nasi,
             lauk = excluded.lauk,
             sayur = excluded.sayur,
             buah = excluded.buah,
             minum = excluded.minum,
             keterangan = excluded.keterangan",
    )?;

    stmt.execute(params![
        entry.student_id,
        to_db(&entry.date),
        entry.items.nasi,
        entry.items.lauk,
        entry.items.sayur,
        entry.items.buah,
        entry.items.minum,
        entry.keterangan.map(|k| k.to_db_str()),
    ])?;
    Ok(())
}

pub fn find_log(
    conn: &Connection,
    student_id: i64,
    date: &NaiveDate,
) -> AppResult<Option<DailyLogEntry>> {
    let entry = conn
        .query_row(
            "SELECT student_id, date, nasi, lauk, sayur, buah, minum, keterangan
             FROM daily_menu_logs
             WHERE student_id = ?1 AND date = ?2",
            params![student_id, to_db(date)],
            |row| {
                let status: Option<String> = row.get("keterangan")?;
                Ok(DailyLogEntry {
                    student_id: row.get("student_id")?,
                    date: map_date(row)?,
                    items: map_items(row)?,
                    keterangan: status.as_deref().and_then(Keterangan::from_db_str),
                })
            },
        )
        .optional()?;
    Ok(entry)
}

/// All logs with `start <= date <= end`, oldest first.
pub fn load_between(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<LogWithStudent>> {
    let mut stmt = conn.prepare(
        "SELECT l.student_id, s.name AS student_name, c.name AS class_name,
                l.date, l.nasi, l.lauk, l.sayur, l.buah, l.minum
         FROM daily_menu_logs l
         JOIN students s ON s.id = l.student_id
         JOIN classes c ON c.id = s.class_id
         WHERE l.date BETWEEN ?1 AND ?2
         ORDER BY l.date ASC, l.id ASC",
    )?;

    let rows = stmt.query_map(params![to_db(start), to_db(end)], |row| {
        Ok(LogWithStudent {
            student_id: row.get("student_id")?,
            student_name: row.get("student_name")?,
            class_name: row.get("class_name")?,
            date: map_date(row)?,
            items: map_items(row)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Menu items of every log on `date`, paired with the student's class id.
pub fn load_for_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<(i64, MenuItems)>> {
    let mut stmt = conn.prepare(
        "SELECT s.class_id, l.nasi, l.lauk, l.sayur, l.buah, l.minum
         FROM daily_menu_logs l
         JOIN students s ON s.id = l.student_id
         WHERE l.date = ?1",
    )?;

    let rows = stmt.query_map([to_db(date)], |row| {
        Ok((row.get::<_, i64>("class_id")?, map_items(row)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
