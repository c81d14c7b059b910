use crate::cli::commands::report;
use crate::cli::parser::{Cli, Commands, StudentCommand};
use crate::config::Config;
use crate::core::classes::ClassLogic;
use crate::core::students::StudentLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Student { action } = &cli.command else {
        return Ok(());
    };
    let pool = DbPool::new(&cfg.database)?;
    let conn = &pool.conn;

    match action {
        StudentCommand::Add { name, class } => {
            let class = ClassLogic::resolve(conn, class)?;
            let res = StudentLogic::add(conn, name, class.id);
            report(res, cli.json, |_| {
                format!("Student '{}' added to {}.", name.trim(), class.name)
            })
        }
        StudentCommand::List { class } => {
            let class_id = match class {
                Some(key) => Some(ClassLogic::resolve(conn, key)?.id),
                None => None,
            };
            let list = StudentLogic::list(conn, class_id)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&list)?);
                return Ok(());
            }
            if list.is_empty() {
                info("No students found.");
                return Ok(());
            }

            header("Students");
            let sep = cfg.separator_char.chars().next().unwrap_or('-');
            let mut table = Table::new(vec!["ID", "Name", "Class"], sep);
            for s in &list {
                table.add_row(vec![s.id.to_string(), s.name.clone(), s.class_name.clone()]);
            }
            print!("{}", table.render());
            Ok(())
        }
        StudentCommand::Edit { id, name, class } => {
            let current = StudentLogic::get(conn, *id)?;
            let class_id = match class {
                Some(key) => ClassLogic::resolve(conn, key)?.id,
                None => current.class_id,
            };
            let name = name.as_deref().unwrap_or(&current.name);
            let res = StudentLogic::update(conn, *id, name, class_id);
            report(res, cli.json, |_| format!("Student {id} updated."))
        }
        StudentCommand::Del { ids, all } => {
            let res = if *all {
                StudentLogic::delete_all(conn)
            } else if let [id] = ids.as_slice() {
                StudentLogic::delete(conn, *id)
            } else {
                StudentLogic::bulk_delete(conn, ids)
            };
            report(res, cli.json, |r| match r.count() {
                Some(n) => format!("{n} student(s) deleted."),
                None => "Student deleted.".to_string(),
            })
        }
    }
}
