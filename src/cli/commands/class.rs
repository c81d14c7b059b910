use crate::cli::commands::report;
use crate::cli::parser::{ClassCommand, Cli, Commands};
use crate::config::Config;
use crate::core::action::ActionResult;
use crate::core::classes::ClassLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Class { action } = &cli.command else {
        return Ok(());
    };
    let pool = DbPool::new(&cfg.database)?;
    let conn = &pool.conn;

    match action {
        ClassCommand::Add { name, teacher } => {
            let res = ClassLogic::add(conn, name, teacher.as_deref());
            report(res, cli.json, |_| format!("Class '{}' added.", name.trim()))
        }
        ClassCommand::List => {
            let list = ClassLogic::list(conn)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&list)?);
                return Ok(());
            }
            if list.is_empty() {
                info("No classes yet.");
                return Ok(());
            }

            header("Classes");
            let sep = cfg.separator_char.chars().next().unwrap_or('-');
            let mut table = Table::new(vec!["ID", "Class", "Homeroom teacher", "Students"], sep);
            for c in &list {
                table.add_row(vec![
                    c.class.id.to_string(),
                    c.class.name.clone(),
                    c.class.teacher_or("-").to_string(),
                    c.student_count.to_string(),
                ]);
            }
            print!("{}", table.render());
            Ok(())
        }
        ClassCommand::Edit { id, name, teacher } => {
            let current = ClassLogic::get(conn, *id)?;
            let name = name.as_deref().unwrap_or(&current.name);
            // without --teacher the current teacher is kept
            let teacher = match teacher {
                Some(t) => Some(t.as_str()),
                None => current.homeroom_teacher.as_deref(),
            };
            let res = ClassLogic::update(conn, *id, name, teacher);
            report(res, cli.json, |_| format!("Class {id} updated."))
        }
        ClassCommand::Del { ids, all } => {
            let res = if *all {
                ClassLogic::delete_all(conn)
            } else if let [id] = ids.as_slice() {
                ClassLogic::delete(conn, *id)
            } else {
                ClassLogic::bulk_delete(conn, ids)
            };
            report(res, cli.json, deleted_text)
        }
    }
}

fn deleted_text(res: &ActionResult) -> String {
    match res.count() {
        Some(n) => format!("{n} class(es) deleted."),
        None => "Class deleted.".to_string(),
    }
}
