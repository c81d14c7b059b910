use crate::db::menu_logs::{self, LogWithStudent};
use crate::errors::AppResult;
use crate::models::{DayStatus, StudentRecap};
use crate::utils::date::month_bounds;
use chrono::{Datelike, NaiveDate};
use rusqlite::Connection;
use std::collections::HashMap;

/// Monthly recap aggregation.
pub struct RecapLogic;

impl RecapLogic {
    /// One row per student with at least one log in the month, each row
    /// mapping day-of-month to the status of that day's log. Rows keep the
    /// order in which their student's first log was read (logs are read
    /// oldest first); students without logs produce no row.
    pub fn monthly(conn: &Connection, month: u32, year: i32) -> AppResult<Vec<StudentRecap>> {
        let (start, end) = month_bounds(month, year)?;
        let logs = menu_logs::load_between(conn, &start, &end)?;
        Ok(group_by_student(logs))
    }

    /// Bounds actually queried for a month, exposed for reports.
    pub fn range(month: u32, year: i32) -> AppResult<(NaiveDate, NaiveDate)> {
        month_bounds(month, year)
    }
}

/// Group raw logs into recap rows, preserving first-encounter order.
pub fn group_by_student(logs: Vec<LogWithStudent>) -> Vec<StudentRecap> {
    let mut rows: Vec<StudentRecap> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for log in logs {
        let pos = *index.entry(log.student_id).or_insert_with(|| {
            rows.push(StudentRecap {
                student_id: log.student_id,
                student_name: log.student_name.clone(),
                class_name: log.class_name.clone(),
                logs_by_day: Default::default(),
            });
            rows.len() - 1
        });

        rows[pos]
            .logs_by_day
            .insert(log.date.day(), DayStatus::classify(&log.items));
    }

    rows
}
