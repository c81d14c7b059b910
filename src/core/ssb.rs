use crate::core::action::ActionResult;
use crate::db::log::audit;
use crate::db::{attendance, students};
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceMark, Class};
use crate::utils::date::to_db;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Which students of a class attended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollCall {
    /// Only the listed students attended.
    Present(Vec<i64>),
    /// Everyone attended except the listed students. An empty list marks
    /// the whole class present.
    Absent(Vec<i64>),
}

impl RollCall {
    fn ids(&self) -> &[i64] {
        match self {
            RollCall::Present(ids) | RollCall::Absent(ids) => ids,
        }
    }

    pub fn is_present(&self, student_id: i64) -> bool {
        match self {
            RollCall::Present(ids) => ids.contains(&student_id),
            RollCall::Absent(ids) => !ids.contains(&student_id),
        }
    }
}

/// SSB ("Sarapan Sehat Bersama") attendance.
pub struct SsbLogic;

impl SsbLogic {
    /// Ensure the event of `date` exists and upsert every mark, all inside
    /// one transaction. A failing mark rolls back the whole event save.
    pub fn save_attendance(
        conn: &mut Connection,
        date: NaiveDate,
        marks: &[AttendanceMark],
    ) -> ActionResult {
        let res = (|| -> AppResult<(i64, usize)> {
            let tx = conn.transaction()?;
            let event_id = attendance::ensure_event(&tx, &date)?;
            for mark in marks {
                attendance::upsert_attendance(&tx, event_id, mark)?;
            }
            tx.commit()?;
            Ok((event_id, marks.len()))
        })();

        ActionResult::guard(res, "Failed to save SSB attendance.", |(event_id, n)| {
            let present = marks.iter().filter(|m| m.is_present).count();
            audit(
                conn,
                "ssb_save",
                &to_db(&date),
                &format!("Event {event_id}: {present}/{n} present"),
            );
            ActionResult::counted(n)
        })
    }

    /// One mark per student of the class, following the roll call.
    pub fn marks_for_class(
        conn: &Connection,
        class: &Class,
        roll: &RollCall,
    ) -> AppResult<Vec<AttendanceMark>> {
        let roster = students::list_students(conn, Some(class.id))?;

        if let Some(stray) = roll.ids().iter().find(|id| !roster.iter().any(|s| s.id == **id)) {
            return Err(AppError::StudentNotFound(format!(
                "{stray} is not a student of class {}",
                class.name
            )));
        }

        Ok(roster
            .iter()
            .map(|s| AttendanceMark::new(s.id, roll.is_present(s.id)))
            .collect())
    }

    pub fn load(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<AttendanceMark>> {
        attendance::load_for_date(conn, date)
    }
}
