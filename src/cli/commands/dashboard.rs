use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::classes::ClassLogic;
use crate::core::dashboard::{DashboardLogic, ItemStat};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::{parse_date, to_db, today};
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Dashboard { date, class } = &cli.command else {
        return Ok(());
    };

    let date = match date {
        Some(d) => parse_date(d)?,
        None => today(),
    };

    let pool = DbPool::new(&cfg.database)?;
    let class_id = match class {
        Some(key) => Some(ClassLogic::resolve(&pool.conn, key)?.id),
        None => None,
    };
    let overview = DashboardLogic::overview(&pool.conn, date, class_id)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
        return Ok(());
    }

    let sep = cfg.separator_char.chars().next().unwrap_or('-');

    header(format!("{} - {}", cfg.school_name, to_db(&overview.date)));
    println!("Students      : {}", overview.total_students);
    println!("Classes       : {}", overview.total_classes);
    println!("Logs today    : {}", overview.logs_today);
    println!(
        "SSB attendance: {}/{} present",
        overview.ssb_present, overview.ssb_recorded
    );
    println!();
    print_items(&overview.items, sep);

    if let Some(c) = &overview.class {
        println!();
        header(format!("Class {} ({} students, {} logs)", c.class_name, c.student_count, c.logs));
        print_items(&c.items, sep);
    }

    if !overview.classes.is_empty() {
        println!();
        let mut table = Table::new(vec!["Class", "Students"], sep);
        for c in &overview.classes {
            table.add_row(vec![c.class.name.clone(), c.student_count.to_string()]);
        }
        print!("{}", table.render());
    }

    Ok(())
}

fn print_items(items: &[ItemStat], sep: char) {
    let mut table = Table::new(vec!["Item", "Count", "%"], sep);
    for s in items {
        table.add_row(vec![
            s.item.label().to_string(),
            s.count.to_string(),
            format!("{}%", s.percentage),
        ]);
    }
    print!("{}", table.render());
}
