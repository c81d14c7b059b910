pub mod class;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod login;
pub mod menu;
pub mod recap;
pub mod setting;
pub mod ssb;
pub mod student;

use crate::core::action::ActionResult;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};

/// Print an action result, as JSON or as console messages. A failed action
/// becomes an error so the process exits non-zero.
pub fn report(res: ActionResult, json: bool, ok_text: impl FnOnce(&ActionResult) -> String) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string(&res)?);
    } else if res.is_success() {
        success(ok_text(&res));
        if let Some(msg) = res.message() {
            warning(msg);
        }
        for e in res.errors() {
            error(e);
        }
    }

    match res {
        ActionResult::Ok { .. } => Ok(()),
        ActionResult::Failed { error } => Err(AppError::ActionFailed(error)),
    }
}
