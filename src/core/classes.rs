use crate::core::action::ActionResult;
use crate::db::classes;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::models::class::normalize_teacher;
use crate::models::{Class, ClassSummary};
use rusqlite::Connection;

/// Class management (admin area).
pub struct ClassLogic;

impl ClassLogic {
    pub fn add(conn: &Connection, name: &str, teacher: Option<&str>) -> ActionResult {
        let name = name.trim();
        let teacher = normalize_teacher(teacher);
        let res = classes::insert_class(conn, name, teacher.as_deref());
        ActionResult::guard(
            res,
            "Failed to add class (the name may already exist).",
            |id| {
                audit(conn, "class_add", name, &format!("Class {name} created (id {id})"));
                ActionResult::done()
            },
        )
    }

    pub fn update(conn: &Connection, id: i64, name: &str, teacher: Option<&str>) -> ActionResult {
        let name = name.trim();
        let teacher = normalize_teacher(teacher);
        let res = classes::update_class(conn, id, name, teacher.as_deref()).and_then(|n| {
            if n == 0 {
                Err(AppError::ClassNotFound(id.to_string()))
            } else {
                Ok(())
            }
        });
        ActionResult::guard(res, "Failed to update class.", |_| {
            audit(conn, "class_edit", name, &format!("Class {id} updated"));
            ActionResult::done()
        })
    }

    pub fn delete(conn: &Connection, id: i64) -> ActionResult {
        let res = classes::delete_class(conn, id).and_then(|n| {
            if n == 0 {
                Err(AppError::ClassNotFound(id.to_string()))
            } else {
                Ok(())
            }
        });
        ActionResult::guard(res, "Failed to delete class.", |_| {
            audit(conn, "class_del", &id.to_string(), "Class deleted");
            ActionResult::done()
        })
    }

    pub fn bulk_delete(conn: &Connection, ids: &[i64]) -> ActionResult {
        ActionResult::guard(
            classes::delete_classes(conn, ids),
            "Failed to delete the selected classes.",
            |n| {
                audit(conn, "class_del", "bulk", &format!("{n} classes deleted"));
                ActionResult::counted(n)
            },
        )
    }

    /// Remove every class; students, their logs and attendance follow
    /// through the cascade.
    pub fn delete_all(conn: &Connection) -> ActionResult {
        ActionResult::guard(
            classes::delete_all(conn),
            "Failed to delete all classes.",
            |n| {
                audit(conn, "reset", "classes", &format!("{n} classes deleted"));
                ActionResult::counted(n)
            },
        )
    }

    pub fn list(conn: &Connection) -> AppResult<Vec<ClassSummary>> {
        classes::list_classes(conn)
    }

    pub fn get(conn: &Connection, id: i64) -> AppResult<Class> {
        classes::find_by_id(conn, id)?.ok_or_else(|| AppError::ClassNotFound(id.to_string()))
    }

    /// Resolve a class given either its numeric id or its exact name.
    /// A numeric id wins when both could match.
    pub fn resolve(conn: &Connection, key: &str) -> AppResult<Class> {
        let key = key.trim();
        if let Ok(id) = key.parse::<i64>()
            && let Some(c) = classes::find_by_id(conn, id)?
        {
            return Ok(c);
        }
        classes::find_by_name(conn, key)?.ok_or_else(|| AppError::ClassNotFound(key.to_string()))
    }
}
