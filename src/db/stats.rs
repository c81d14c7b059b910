use crate::db::migrate::known_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

const TABLES: &[&str] = &[
    "classes",
    "students",
    "daily_menu_logs",
    "breakfast_events",
    "breakfast_attendance",
    "admins",
    "system_settings",
];

/// Row count per domain table, in a fixed order.
pub fn table_counts(pool: &DbPool) -> AppResult<Vec<(&'static str, i64)>> {
    let mut out = Vec::with_capacity(TABLES.len());
    for table in TABLES {
        let n: i64 = pool
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        out.push((*table, n));
    }
    Ok(out)
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    println!("{}• Rows:{}", CYAN, RESET);
    for (table, n) in table_counts(pool)? {
        println!("    {:<22} {}{}{}", table, GREEN, n, RESET);
    }

    let first_log: Option<String> = pool
        .conn
        .query_row("SELECT MIN(date) FROM daily_menu_logs", [], |row| row.get(0))
        .optional()?
        .flatten();
    let last_log: Option<String> = pool
        .conn
        .query_row("SELECT MAX(date) FROM daily_menu_logs", [], |row| row.get(0))
        .optional()?
        .flatten();

    println!("{}• Menu log range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first_log.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last_log.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!(
        "{}• Schema migrations known:{} {}",
        CYAN,
        RESET,
        known_versions().len()
    );

    println!();
    Ok(())
}
