//! Structured result returned by every user action.

use crate::errors::AppResult;
use crate::ui::messages::error;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    Ok {
        count: Option<usize>,
        message: Option<String>,
        errors: Vec<String>,
    },
    Failed {
        error: String,
    },
}

impl ActionResult {
    pub fn done() -> Self {
        ActionResult::Ok {
            count: None,
            message: None,
            errors: Vec::new(),
        }
    }

    pub fn counted(count: usize) -> Self {
        ActionResult::Ok {
            count: Some(count),
            message: None,
            errors: Vec::new(),
        }
    }

    pub fn failed<S: Into<String>>(error: S) -> Self {
        ActionResult::Failed {
            error: error.into(),
        }
    }

    pub fn with_message(mut self, msg: Option<String>) -> Self {
        if let ActionResult::Ok { message, .. } = &mut self {
            *message = msg;
        }
        self
    }

    pub fn with_errors(mut self, errs: Vec<String>) -> Self {
        if let ActionResult::Ok { errors, .. } = &mut self {
            *errors = errs;
        }
        self
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Ok { .. })
    }

    pub fn count(&self) -> Option<usize> {
        match self {
            ActionResult::Ok { count, .. } => *count,
            ActionResult::Failed { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ActionResult::Ok { message, .. } => message.as_deref(),
            ActionResult::Failed { .. } => None,
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            ActionResult::Ok { errors, .. } => errors,
            ActionResult::Failed { .. } => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ActionResult::Failed { error } => Some(error.as_str()),
            ActionResult::Ok { .. } => None,
        }
    }

    /// Turn a fallible operation into an action result. The detailed error
    /// goes to stderr; the caller only sees `failure`.
    pub fn guard<T>(
        res: AppResult<T>,
        failure: &str,
        on_ok: impl FnOnce(T) -> ActionResult,
    ) -> ActionResult {
        match res {
            Ok(v) => on_ok(v),
            Err(e) => {
                error(format!("{failure} ({e})"));
                ActionResult::failed(failure)
            }
        }
    }
}

#[derive(Serialize)]
struct Wire<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// `{"success":true,"count":..,"errors":[..]}` or
/// `{"success":false,"error":".."}`.
impl Serialize for ActionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            ActionResult::Ok {
                count,
                message,
                errors,
            } => Wire {
                success: true,
                count: *count,
                message: message.as_deref(),
                errors: Some(errors.as_slice()),
                error: None,
            },
            ActionResult::Failed { error } => Wire {
                success: false,
                count: None,
                message: None,
                errors: None,
                error: Some(error.as_str()),
            },
        };
        wire.serialize(serializer)
    }
}
