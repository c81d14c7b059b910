//! Spreadsheet import: reading rows from a file and reconciling them with
//! the classes and students already stored.

pub mod classes;
pub mod outcome;
pub mod sheet;
pub mod students;

pub use classes::{ClassRow, clean_rows, import_classes, reconcile_classes};
pub use outcome::{ImportSummary, RowOutcome};
pub use sheet::{SheetRow, read_rows};
pub use students::{StudentRow, import_students};
