use crate::core::action::ActionResult;
use crate::db::log::audit;
use crate::db::{menu_logs, students};
use crate::errors::{AppError, AppResult};
use crate::models::{Class, DailyLogEntry, Keterangan, MenuItem, MenuItems};
use chrono::NaiveDate;
use rusqlite::Connection;
use std::collections::HashMap;

/// Homeroom daily menu input.
pub struct MenuLogic;

/// Parse `<student_id>=<items>` where items is a comma separated list of
/// menu items, `all`, or `none` / `-`.
pub fn parse_entry(input: &str) -> AppResult<(i64, MenuItems)> {
    let (id_raw, items_raw) = input
        .split_once('=')
        .ok_or_else(|| AppError::InvalidEntry(input.to_string()))?;
    let student_id: i64 = id_raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidEntry(input.to_string()))?;

    let items_raw = items_raw.trim();
    let items = match items_raw.to_lowercase().as_str() {
        "all" => MenuItems::all(),
        "none" | "-" | "" => MenuItems::default(),
        _ => {
            let mut parsed = Vec::new();
            for code in items_raw.split(',') {
                let item = MenuItem::from_code(code)
                    .ok_or_else(|| AppError::InvalidEntry(format!("{input} (unknown item '{code}')")))?;
                parsed.push(item);
            }
            MenuItems::from_items(&parsed)
        }
    };

    Ok((student_id, items))
}

/// Parse `<student_id>=<status>`.
pub fn parse_status(input: &str) -> AppResult<(i64, Keterangan)> {
    let (id_raw, status_raw) = input
        .split_once('=')
        .ok_or_else(|| AppError::InvalidStatus(input.to_string()))?;
    let student_id: i64 = id_raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidStatus(input.to_string()))?;
    let status =
        Keterangan::from_code(status_raw).ok_or_else(|| AppError::InvalidStatus(input.to_string()))?;
    Ok((student_id, status))
}

impl MenuLogic {
    /// Upsert every entry in one transaction: either all logs are written
    /// or none is. Dates are already day-granular, so a second save for the
    /// same (student, day) overwrites the first.
    pub fn save_daily_logs(conn: &mut Connection, entries: &[DailyLogEntry]) -> ActionResult {
        let res = (|| -> AppResult<usize> {
            let tx = conn.transaction()?;
            for entry in entries {
                menu_logs::upsert_log(&tx, entry)?;
            }
            tx.commit()?;
            Ok(entries.len())
        })();

        ActionResult::guard(res, "Failed to save data to the database.", |n| {
            audit(conn, "menu_save", &n.to_string(), &format!("{n} daily logs saved"));
            ActionResult::counted(n)
        })
    }

    /// Build one entry per student of the class: students with an explicit
    /// entry get its items, everyone else an all-false row. Statuses attach
    /// to the same students.
    pub fn entries_for_class(
        conn: &Connection,
        class: &Class,
        date: NaiveDate,
        items: &[(i64, MenuItems)],
        statuses: &[(i64, Keterangan)],
    ) -> AppResult<Vec<DailyLogEntry>> {
        let roster = students::list_students(conn, Some(class.id))?;

        let known = |id: i64| roster.iter().any(|s| s.id == id);
        for id in items.iter().map(|(id, _)| *id).chain(statuses.iter().map(|(id, _)| *id)) {
            if !known(id) {
                return Err(AppError::StudentNotFound(format!(
                    "{id} is not a student of class {}",
                    class.name
                )));
            }
        }

        let items: HashMap<i64, MenuItems> = items.iter().copied().collect();
        let statuses: HashMap<i64, Keterangan> = statuses.iter().copied().collect();

        Ok(roster
            .iter()
            .map(|s| {
                DailyLogEntry::new(s.id, date, items.get(&s.id).copied().unwrap_or_default())
                    .with_status(statuses.get(&s.id).copied())
            })
            .collect())
    }

    pub fn find(conn: &Connection, student_id: i64, date: &NaiveDate) -> AppResult<Option<DailyLogEntry>> {
        menu_logs::find_log(conn, student_id, date)
    }
}
