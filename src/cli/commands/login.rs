use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::{AuthLogic, SessionStore};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle_login(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Login { username, password } = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;
    let username = username.as_deref().unwrap_or(&cfg.admin_username);
    let session = AuthLogic::login(&pool.conn, cfg, username, password)?;

    success(format!(
        "Logged in as '{}' (valid for {} hours)",
        session.username, cfg.session_hours
    ));
    Ok(())
}

pub fn handle_logout(cfg: &Config) -> AppResult<()> {
    let store = SessionStore::new(cfg.session_file());
    let previous = store.load().ok().flatten();

    if store.clear()? {
        if let Some(s) = previous {
            let pool = DbPool::new(&cfg.database)?;
            audit(&pool.conn, "logout", &s.username, "Admin logged out");
        }
        success("Logged out.");
    } else {
        info("No active session.");
    }
    Ok(())
}
