use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::recap::RecapLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::StudentRecap;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date::{days_in_month, month_name};
use unicode_width::UnicodeWidthStr;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Recap { month, year } = &cli.command else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;
    let recap = RecapLogic::monthly(&pool.conn, *month, *year)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&recap)?);
        return Ok(());
    }

    header(format!("Rekap SSB - {} {}", month_name(*month), year));
    if recap.is_empty() {
        info("No menu logs recorded in this month.");
        return Ok(());
    }

    print_matrix(&recap, days_in_month(*month, *year)?, cfg);
    println!();
    println!("L = Lengkap   K = Kurang   T = Tidak Membawa   - = no log");
    Ok(())
}

fn pad(s: &str, width: usize) -> String {
    format!("{s}{}", " ".repeat(width.saturating_sub(s.width())))
}

/// Student x day matrix. Day cells are colored after padding so the escape
/// codes do not disturb the alignment.
fn print_matrix(recap: &[StudentRecap], days: u32, cfg: &Config) {
    let name_w = recap
        .iter()
        .map(|r| r.student_name.width())
        .chain(std::iter::once("Nama Siswa".width()))
        .max()
        .unwrap_or(0);
    let class_w = recap
        .iter()
        .map(|r| r.class_name.width())
        .chain(std::iter::once("Kelas".width()))
        .max()
        .unwrap_or(0);

    let mut head = format!("{} {}", pad("Nama Siswa", name_w), pad("Kelas", class_w));
    for d in 1..=days {
        head.push_str(&format!(" {d:>2}"));
    }
    println!("{head}");

    let sep = cfg.separator_char.chars().next().unwrap_or('-');
    println!("{}", sep.to_string().repeat(head.width()));

    for r in recap {
        let mut line = format!("{} {}", pad(&r.student_name, name_w), pad(&r.class_name, class_w));
        for d in 1..=days {
            line.push_str(&format!(" {}{:>2}{}", color_for_status(r.status(d)), r.code(d), RESET));
        }
        println!("{line}");
    }
}
