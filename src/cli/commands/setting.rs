use crate::cli::commands::report;
use crate::cli::parser::{Cli, Commands, SettingCommand};
use crate::config::Config;
use crate::core::settings::SettingsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Setting { action } = &cli.command else {
        return Ok(());
    };
    let pool = DbPool::new(&cfg.database)?;

    match action {
        SettingCommand::Get { key } => {
            let value = SettingsLogic::get(&pool.conn, key);
            if cli.json {
                println!("{}", serde_json::json!({ "key": key, "value": value }));
            } else {
                println!("{value}");
            }
            Ok(())
        }
        SettingCommand::Set { key, value } => {
            let res = SettingsLogic::set(&pool.conn, key, value);
            report(res, cli.json, |_| format!("Setting '{key}' updated."))
        }
    }
}
