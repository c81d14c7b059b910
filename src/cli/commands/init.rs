use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auth::{AuthLogic, MIN_BCRYPT_COST};
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
///  - the admin account, when missing
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init { password } = &cli.command else {
        return Ok(());
    };

    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing rsarapan…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", cfg.database));

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    success(format!("Database initialized at {}", cfg.database));

    let cost = if cli.test { MIN_BCRYPT_COST } else { cfg.bcrypt_cost };
    let password = password.as_deref().unwrap_or(DEFAULT_ADMIN_PASSWORD);
    if AuthLogic::seed_admin(&pool.conn, &cfg.admin_username, password, cost)? {
        success(format!("Admin account '{}' created", cfg.admin_username));
        if password == DEFAULT_ADMIN_PASSWORD {
            warning("The admin account uses the default password; change it before real use.");
        }
    }

    log::audit(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", cfg.database),
    );

    success("rsarapan initialization completed!");
    Ok(())
}
