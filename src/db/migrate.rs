use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// A forward-only schema step, identified by a version string that is
/// recorded in the `log` table once applied.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240101_0001_create_classes_students",
        description: "Created classes and students tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS classes (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            name             TEXT NOT NULL UNIQUE,
            homeroom_teacher TEXT,
            created_at       TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS students (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            class_id   INTEGER NOT NULL REFERENCES classes(id) ON DELETE CASCADE,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_students_class ON students(class_id);
        "#,
    },
    Migration {
        version: "20240101_0002_create_daily_menu_logs",
        description: "Created daily_menu_logs table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS daily_menu_logs (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id INTEGER NOT NULL REFERENCES students(id) ON DELETE CASCADE,
            date       TEXT NOT NULL,
            nasi       INTEGER NOT NULL DEFAULT 0,
            lauk       INTEGER NOT NULL DEFAULT 0,
            sayur      INTEGER NOT NULL DEFAULT 0,
            buah       INTEGER NOT NULL DEFAULT 0,
            minum      INTEGER NOT NULL DEFAULT 0,
            keterangan TEXT,
            UNIQUE (student_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_daily_menu_logs_date ON daily_menu_logs(date);
        "#,
    },
    Migration {
        version: "20240101_0003_create_breakfast_attendance",
        description: "Created breakfast_events and breakfast_attendance tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS breakfast_events (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS breakfast_attendance (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            breakfast_event_id INTEGER NOT NULL REFERENCES breakfast_events(id) ON DELETE CASCADE,
            student_id         INTEGER NOT NULL REFERENCES students(id) ON DELETE CASCADE,
            is_present         INTEGER NOT NULL DEFAULT 0,
            UNIQUE (breakfast_event_id, student_id)
        );
        "#,
    },
    Migration {
        version: "20240101_0004_create_admins_settings",
        description: "Created admins and system_settings tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS admins (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS system_settings (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    },
];

/// Ensure that the `log` table exists. It also records applied migrations,
/// so it is created before anything else.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    conn.execute_batch(&format!("BEGIN;\n{}\nCOMMIT;", m.sql))
        .map_err(|e| {
            let _ = conn.execute_batch("ROLLBACK;");
            AppError::Migration(format!("{}: {}", m.version, e))
        })?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    success(format!("Migration applied: {}", m.version));
    Ok(())
}

/// Versions of all migrations known to this binary, oldest first.
pub fn known_versions() -> Vec<&'static str> {
    MIGRATIONS.iter().map(|m| m.version).collect()
}

/// Public entry point: run all pending migrations. Re-running is a no-op.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied += 1;
    }

    Ok(applied)
}
