use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

/// Stored bcrypt hash for `username`, if the admin exists.
pub fn password_hash(conn: &Connection, username: &str) -> AppResult<Option<String>> {
    Ok(conn
        .query_row(
            "SELECT password FROM admins WHERE username = ?1",
            [username],
            |r| r.get(0),
        )
        .optional()?)
}

/// Create the admin unless the username is already taken.
/// Returns true when a row was inserted.
pub fn insert_if_absent(conn: &Connection, username: &str, hash: &str) -> AppResult<bool> {
    let n = conn.execute(
        "INSERT INTO admins (username, password) VALUES (?1, ?2)
         ON CONFLICT(username) DO NOTHING",
        params![username, hash],
    )?;
    Ok(n > 0)
}
