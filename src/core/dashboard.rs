use crate::db::{attendance, classes, menu_logs, students};
use crate::errors::AppResult;
use crate::models::{ClassSummary, MenuItem, MenuItems};
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItemStat {
    pub item: MenuItem,
    pub count: usize,
    /// Rounded share of students who brought the item.
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassOverview {
    pub class_name: String,
    pub student_count: i64,
    pub logs: usize,
    pub items: Vec<ItemStat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyOverview {
    pub date: NaiveDate,
    pub total_students: i64,
    pub total_classes: i64,
    pub logs_today: usize,
    pub items: Vec<ItemStat>,
    pub ssb_present: usize,
    pub ssb_recorded: usize,
    pub class: Option<ClassOverview>,
    pub classes: Vec<ClassSummary>,
}

fn percentage(count: usize, total: i64) -> u32 {
    if total <= 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

pub fn item_stats(logs: &[MenuItems], total: i64) -> Vec<ItemStat> {
    MenuItem::ALL
        .iter()
        .map(|item| {
            let count = logs.iter().filter(|l| l.get(*item)).count();
            ItemStat {
                item: *item,
                count,
                percentage: percentage(count, total),
            }
        })
        .collect()
}

pub struct DashboardLogic;

impl DashboardLogic {
    /// Overview of one day. With `class_id`, the class block reports the
    /// same per-item figures over that class only (divisor at least 1).
    pub fn overview(conn: &Connection, date: NaiveDate, class_id: Option<i64>) -> AppResult<DailyOverview> {
        let total_students = students::count(conn)?;
        let total_classes = classes::count(conn)?;
        let logs = menu_logs::load_for_date(conn, &date)?;
        let class_list = classes::list_classes(conn)?;

        let all_items: Vec<MenuItems> = logs.iter().map(|(_, items)| *items).collect();

        let class = class_id.and_then(|cid| class_list.iter().find(|c| c.class.id == cid)).map(|summary| {
            let class_items: Vec<MenuItems> = logs
                .iter()
                .filter(|(cid, _)| *cid == summary.class.id)
                .map(|(_, items)| *items)
                .collect();
            let divisor = summary.student_count.max(1);
            ClassOverview {
                class_name: summary.class.name.clone(),
                student_count: summary.student_count,
                logs: class_items.len(),
                items: item_stats(&class_items, divisor),
            }
        });

        let marks = attendance::load_for_date(conn, &date)?;

        Ok(DailyOverview {
            date,
            total_students,
            total_classes,
            logs_today: logs.len(),
            items: item_stats(&all_items, total_students),
            ssb_present: marks.iter().filter(|m| m.is_present).count(),
            ssb_recorded: marks.len(),
            class,
            classes: class_list,
        })
    }
}
