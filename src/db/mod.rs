pub mod admins;
pub mod attendance;
pub mod classes;
pub mod initialize;
pub mod log;
pub mod menu_logs;
pub mod migrate;
pub mod pool;
pub mod settings;
pub mod stats;
pub mod students;

pub use initialize::init_db;
pub use pool::DbPool;

/// Build `?,?,?` for an `IN (...)` list of `n` values.
pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(",")
}
