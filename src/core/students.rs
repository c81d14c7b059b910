use crate::core::action::ActionResult;
use crate::db::log::audit;
use crate::db::students;
use crate::errors::{AppError, AppResult};
use crate::models::Student;
use rusqlite::Connection;

/// Student management (admin area).
pub struct StudentLogic;

fn require_row(n: usize, id: i64) -> AppResult<()> {
    if n == 0 {
        Err(AppError::StudentNotFound(id.to_string()))
    } else {
        Ok(())
    }
}

impl StudentLogic {
    pub fn add(conn: &Connection, name: &str, class_id: i64) -> ActionResult {
        let name = name.trim();
        ActionResult::guard(
            students::insert_student(conn, name, class_id),
            "Failed to add student.",
            |id| {
                audit(conn, "student_add", name, &format!("Student {name} created (id {id})"));
                ActionResult::done()
            },
        )
    }

    pub fn update(conn: &Connection, id: i64, name: &str, class_id: i64) -> ActionResult {
        let name = name.trim();
        let res = students::update_student(conn, id, name, class_id).and_then(|n| require_row(n, id));
        ActionResult::guard(res, "Failed to update student.", |_| {
            audit(conn, "student_edit", name, &format!("Student {id} updated"));
            ActionResult::done()
        })
    }

    pub fn delete(conn: &Connection, id: i64) -> ActionResult {
        let res = students::delete_student(conn, id).and_then(|n| require_row(n, id));
        ActionResult::guard(res, "Failed to delete student.", |_| {
            audit(conn, "student_del", &id.to_string(), "Student deleted");
            ActionResult::done()
        })
    }

    pub fn bulk_delete(conn: &Connection, ids: &[i64]) -> ActionResult {
        ActionResult::guard(
            students::delete_students(conn, ids),
            "Failed to delete the selected students.",
            |n| {
                audit(conn, "student_del", "bulk", &format!("{n} students deleted"));
                ActionResult::counted(n)
            },
        )
    }

    /// Remove every student; their daily logs and attendance cascade.
    pub fn delete_all(conn: &Connection) -> ActionResult {
        ActionResult::guard(
            students::delete_all(conn),
            "Failed to delete all students.",
            |n| {
                audit(conn, "reset", "students", &format!("{n} students deleted"));
                ActionResult::counted(n)
            },
        )
    }

    pub fn get(conn: &Connection, id: i64) -> AppResult<Student> {
        students::find_by_id(conn, id)?.ok_or_else(|| AppError::StudentNotFound(id.to_string()))
    }

    pub fn list(conn: &Connection, class_id: Option<i64>) -> AppResult<Vec<Student>> {
        students::list_students(conn, class_id)
    }
}
