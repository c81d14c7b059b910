//! Admin authentication and the per-invocation request context.
//!
//! A login leaves a session file next to the database. The file is not
//! signed: its presence, the username it names and its age are the whole
//! check, mirroring a plain "admin" cookie with a fixed lifetime.

use crate::config::Config;
use crate::db::admins;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Local};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// bcrypt's lowest accepted cost, used in test mode.
pub const MIN_BCRYPT_COST: u32 = 4;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminSession {
    pub username: String,
    pub issued_at: DateTime<Local>,
}

impl AdminSession {
    pub fn new(username: &str, issued_at: DateTime<Local>) -> Self {
        Self {
            username: username.to_string(),
            issued_at,
        }
    }

    pub fn is_valid_at(&self, now: DateTime<Local>, lifetime_hours: i64) -> bool {
        now >= self.issued_at && now - self.issued_at < Duration::hours(lifetime_hours)
    }
}

/// Explicit, request-scoped context handed to every command handler.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub admin: Option<AdminSession>,
}

impl RequestContext {
    /// Build the context from the session file of the configured database.
    /// Expired or unreadable sessions count as "not logged in".
    pub fn from_config(cfg: &Config) -> Self {
        let admin = SessionStore::new(cfg.session_file())
            .load()
            .ok()
            .flatten()
            .filter(|s| s.is_valid_at(Local::now(), cfg.session_hours));
        Self { admin }
    }

    pub fn require_admin(&self) -> AppResult<&AdminSession> {
        self.admin.as_ref().ok_or_else(|| {
            AppError::Unauthorized("admin login required (run `rsarapan login`)".to_string())
        })
    }
}

/// Reads and writes the session file.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> AppResult<Option<AdminSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(Some(serde_yaml::from_str(&content)?))
    }

    pub fn save(&self, session: &AdminSession) -> AppResult<()> {
        fs::write(&self.path, serde_yaml::to_string(session)?)?;
        Ok(())
    }

    /// Returns true when a session file was removed.
    pub fn clear(&self) -> AppResult<bool> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            return Ok(true);
        }
        Ok(false)
    }
}

pub struct AuthLogic;

impl AuthLogic {
    pub fn hash_password(password: &str, cost: u32) -> AppResult<String> {
        Ok(bcrypt::hash(password, cost.max(MIN_BCRYPT_COST))?)
    }

    /// Create the admin account unless it already exists.
    pub fn seed_admin(conn: &Connection, username: &str, password: &str, cost: u32) -> AppResult<bool> {
        if admins::password_hash(conn, username)?.is_some() {
            return Ok(false);
        }
        let hash = Self::hash_password(password, cost)?;
        let created = admins::insert_if_absent(conn, username, &hash)?;
        if created {
            audit(conn, "admin_seed", username, "Default admin account created");
        }
        Ok(created)
    }

    /// Check the credentials; unknown users and wrong passwords are
    /// indistinguishable to the caller.
    pub fn verify(conn: &Connection, username: &str, password: &str) -> AppResult<Option<AdminSession>> {
        let Some(hash) = admins::password_hash(conn, username)? else {
            return Ok(None);
        };
        if bcrypt::verify(password, &hash).unwrap_or(false) {
            Ok(Some(AdminSession::new(username, Local::now())))
        } else {
            Ok(None)
        }
    }

    /// Verify and persist a session.
    pub fn login(conn: &Connection, cfg: &Config, username: &str, password: &str) -> AppResult<AdminSession> {
        let session = Self::verify(conn, username, password)?
            .ok_or_else(|| AppError::Unauthorized("wrong username or password".to_string()))?;
        SessionStore::new(cfg.session_file()).save(&session)?;
        audit(conn, "login", username, "Admin logged in");
        Ok(session)
    }
}
