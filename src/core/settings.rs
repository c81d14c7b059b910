use crate::core::action::ActionResult;
use crate::db::log::audit;
use crate::db::settings;
use crate::ui::messages::warning;
use rusqlite::Connection;

/// Well-known key: where homeroom staff upload meal photos.
pub const UPLOAD_URL: &str = "upload_url";

pub struct SettingsLogic;

impl SettingsLogic {
    /// Value of `key`, or an empty string when it is missing or unreadable.
    pub fn get(conn: &Connection, key: &str) -> String {
        match settings::get(conn, key) {
            Ok(v) => v.unwrap_or_default(),
            Err(e) => {
                warning(format!("Failed to read setting {key}: {e}"));
                String::new()
            }
        }
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> ActionResult {
        ActionResult::guard(
            settings::upsert(conn, key, value),
            "Failed to update setting.",
            |_| {
                audit(conn, "setting", key, value);
                ActionResult::done()
            },
        )
    }
}
