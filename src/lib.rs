//! rsarapan library root.
//! Exposes the CLI parser, the high-level run() function and the domain
//! modules used by the commands and the tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::commands;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auth::{MIN_BCRYPT_COST, RequestContext};
use crate::errors::AppResult;

/// Central command dispatcher. Admin-only commands are refused here unless
/// the request context carries a valid session.
pub fn dispatch(cli: &Cli, cfg: &Config, ctx: &RequestContext) -> AppResult<()> {
    if cli.command.requires_admin() {
        ctx.require_admin()?;
    }

    match &cli.command {
        Commands::Init { .. } => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } => commands::login::handle_login(&cli.command, cfg),
        Commands::Logout => commands::login::handle_logout(cfg),
        Commands::Class { .. } => commands::class::handle(cli, cfg),
        Commands::Student { .. } => commands::student::handle(cli, cfg),
        Commands::Import { .. } => commands::import::handle(cli, cfg),
        Commands::Menu { .. } => commands::menu::handle(cli, cfg),
        Commands::Ssb { .. } => commands::ssb::handle(cli, cfg),
        Commands::Recap { .. } => commands::recap::handle(cli, cfg),
        Commands::Export { .. } => commands::export::handle(cli, cfg),
        Commands::Dashboard { .. } => commands::dashboard::handle(cli, cfg),
        Commands::Setting { .. } => commands::setting::handle(cli, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // test mode never reads the user's config file
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db).to_string_lossy().to_string();
    }
    if cli.test {
        cfg.bcrypt_cost = MIN_BCRYPT_COST;
    }

    let ctx = RequestContext::from_config(&cfg);
    dispatch(&cli, &cfg, &ctx)
}
