use crate::cli::commands::report;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::classes::ClassLogic;
use crate::core::menu::{MenuLogic, parse_entry, parse_status};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::{parse_date, to_db, today};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Menu {
        class,
        date,
        entries,
        statuses,
    } = &cli.command
    else {
        return Ok(());
    };

    let date = match date {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    let items = entries
        .iter()
        .map(|e| parse_entry(e))
        .collect::<AppResult<Vec<_>>>()?;
    let statuses = statuses
        .iter()
        .map(|s| parse_status(s))
        .collect::<AppResult<Vec<_>>>()?;

    let mut pool = DbPool::new(&cfg.database)?;
    let class = ClassLogic::resolve(&pool.conn, class)?;
    let logs = MenuLogic::entries_for_class(&pool.conn, &class, date, &items, &statuses)?;

    let res = MenuLogic::save_daily_logs(&mut pool.conn, &logs);
    report(res, cli.json, |r| {
        format!(
            "{} daily logs saved for class {} on {}.",
            r.count().unwrap_or(0),
            class.name,
            to_db(&date)
        )
    })
}
