/// ANSI color helper utilities for terminal output.
use crate::models::DayStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Recap cell color: green for complete, yellow for partial, red for none,
/// grey when the day has no log.
pub fn color_for_status(status: Option<DayStatus>) -> &'static str {
    match status {
        Some(DayStatus::Complete) => GREEN,
        Some(DayStatus::Partial) => YELLOW,
        Some(DayStatus::None) => RED,
        None => GREY,
    }
}
