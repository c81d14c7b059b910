mod common;
use chrono::NaiveDate;
use common::{admin_db, memory_pool, rsa};
use predicates::str::contains;
use rsarapan::core::classes::ClassLogic;
use rsarapan::core::dashboard::{DashboardLogic, item_stats};
use rsarapan::core::menu::MenuLogic;
use rsarapan::core::settings::{SettingsLogic, UPLOAD_URL};
use rsarapan::core::students::StudentLogic;
use rsarapan::models::{DailyLogEntry, MenuItem, MenuItems};

#[test]
fn test_settings_default_to_empty_and_upsert() {
    let pool = memory_pool();
    assert_eq!(SettingsLogic::get(&pool.conn, UPLOAD_URL), "");

    assert!(SettingsLogic::set(&pool.conn, UPLOAD_URL, "https://a.example").is_success());
    assert!(SettingsLogic::set(&pool.conn, UPLOAD_URL, "https://b.example").is_success());
    assert_eq!(SettingsLogic::get(&pool.conn, UPLOAD_URL), "https://b.example");
}

#[test]
fn test_item_stats_round_percentages() {
    let logs = [
        MenuItems::all(),
        MenuItems::from_items(&[MenuItem::Nasi]),
        MenuItems::default(),
    ];
    let stats = item_stats(&logs, 3);
    let nasi = stats.iter().find(|s| s.item == MenuItem::Nasi).unwrap();
    assert_eq!(nasi.count, 2);
    assert_eq!(nasi.percentage, 67);

    let buah = stats.iter().find(|s| s.item == MenuItem::Buah).unwrap();
    assert_eq!(buah.percentage, 33);

    assert!(item_stats(&logs, 0).iter().all(|s| s.percentage == 0));
}

#[test]
fn test_dashboard_overview_by_class() {
    let mut pool = memory_pool();
    assert!(ClassLogic::add(&pool.conn, "7A", None).is_success());
    assert!(ClassLogic::add(&pool.conn, "7B", None).is_success());
    assert!(StudentLogic::add(&pool.conn, "Budi", 1).is_success());
    assert!(StudentLogic::add(&pool.conn, "Siti", 1).is_success());
    assert!(StudentLogic::add(&pool.conn, "Andi", 2).is_success());

    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let entries = vec![
        DailyLogEntry::new(1, date, MenuItems::all()),
        DailyLogEntry::new(3, date, MenuItems::from_items(&[MenuItem::Nasi])),
    ];
    assert!(MenuLogic::save_daily_logs(&mut pool.conn, &entries).is_success());

    let overview = DashboardLogic::overview(&pool.conn, date, Some(1)).unwrap();
    assert_eq!(overview.total_students, 3);
    assert_eq!(overview.total_classes, 2);
    assert_eq!(overview.logs_today, 2);

    let class = overview.class.unwrap();
    assert_eq!(class.class_name, "7A");
    assert_eq!(class.logs, 1);
    let nasi = class.items.iter().find(|s| s.item == MenuItem::Nasi).unwrap();
    assert_eq!(nasi.percentage, 50);

    assert_eq!(overview.classes.len(), 2);
    assert_eq!(overview.classes[1].student_count, 1);
}

#[test]
fn test_setting_commands() {
    let db_path = admin_db("setting_commands");

    rsa()
        .args(["--db", &db_path, "--test", "setting", "set", "upload_url", "https://forms.example/ssb"])
        .assert()
        .success();

    rsa()
        .args(["--db", &db_path, "--test", "setting", "get", "upload_url"])
        .assert()
        .success()
        .stdout(contains("https://forms.example/ssb"));
}
