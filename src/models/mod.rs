pub mod attendance;
pub mod class;
pub mod day_status;
pub mod menu;
pub mod recap;
pub mod student;

pub use attendance::AttendanceMark;
pub use class::{Class, ClassSummary};
pub use day_status::DayStatus;
pub use menu::{DailyLogEntry, Keterangan, MenuItem, MenuItems};
pub use recap::StudentRecap;
pub use student::Student;
