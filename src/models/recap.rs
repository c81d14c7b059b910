use crate::models::day_status::{DayStatus, NO_LOG_LABEL};
use serde::Serialize;
use std::collections::BTreeMap;

/// One row of the monthly recap: a student and the status of every day
/// that has a log. Days without a log are absent from `logs_by_day`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StudentRecap {
    pub student_id: i64,
    pub student_name: String,
    pub class_name: String,
    pub logs_by_day: BTreeMap<u32, DayStatus>,
}

impl StudentRecap {
    pub fn status(&self, day: u32) -> Option<DayStatus> {
        self.logs_by_day.get(&day).copied()
    }

    pub fn label(&self, day: u32) -> &'static str {
        self.status(day).map_or(NO_LOG_LABEL, |s| s.label())
    }

    pub fn code(&self, day: u32) -> &'static str {
        self.status(day).map_or(NO_LOG_LABEL, |s| s.code())
    }
}
