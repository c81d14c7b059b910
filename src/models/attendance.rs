use serde::{Deserialize, Serialize};

/// Presence of one student at an SSB breakfast event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceMark {
    pub student_id: i64,
    pub is_present: bool,
}

impl AttendanceMark {
    pub fn new(student_id: i64, is_present: bool) -> Self {
        Self {
            student_id,
            is_present,
        }
    }
}
