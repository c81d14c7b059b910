mod common;
use chrono::NaiveDate;
use common::{admin_db, memory_pool, rsa, seed_school};
use predicates::prelude::*;
use predicates::str::contains;
use rsarapan::core::classes::ClassLogic;
use rsarapan::core::menu::{MenuLogic, parse_entry, parse_status};
use rsarapan::core::students::StudentLogic;
use rsarapan::models::{DailyLogEntry, Keterangan, MenuItem, MenuItems};

fn may_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

#[test]
fn test_parse_entry_forms() {
    let (id, items) = parse_entry("3=nasi,Lauk , buah").unwrap();
    assert_eq!(id, 3);
    assert!(items.nasi && items.lauk && items.buah);
    assert!(!items.sayur && !items.minum);

    assert_eq!(parse_entry("1=all").unwrap().1, MenuItems::all());
    assert_eq!(parse_entry("1=none").unwrap().1, MenuItems::default());
    assert_eq!(parse_entry("1=-").unwrap().1.count(), 0);

    assert!(parse_entry("1=nasi,pizza").is_err());
    assert!(parse_entry("x=all").is_err());
    assert!(parse_entry("all").is_err());
}

#[test]
fn test_parse_status_codes() {
    assert_eq!(parse_status("2=TM").unwrap(), (2, Keterangan::TidakMasuk));
    assert_eq!(parse_status("2=tidak-membawa").unwrap(), (2, Keterangan::TidakMembawa));
    assert!(parse_status("2=sakit").is_err());
}

#[test]
fn test_same_day_saves_keep_one_row_with_latest_values() {
    let mut pool = memory_pool();
    assert!(ClassLogic::add(&pool.conn, "7A", None).is_success());
    assert!(StudentLogic::add(&pool.conn, "Budi", 1).is_success());

    let first = vec![DailyLogEntry::new(1, may_first(), MenuItems::all())];
    assert_eq!(MenuLogic::save_daily_logs(&mut pool.conn, &first).count(), Some(1));

    let second = vec![
        DailyLogEntry::new(1, may_first(), MenuItems::from_items(&[MenuItem::Nasi]))
            .with_status(Some(Keterangan::TidakMembawa)),
    ];
    assert!(MenuLogic::save_daily_logs(&mut pool.conn, &second).is_success());

    let rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM daily_menu_logs", [], |r| r.get(0))
        .unwrap();
    assert_eq!(rows, 1);

    let stored = MenuLogic::find(&pool.conn, 1, &may_first()).unwrap().unwrap();
    assert_eq!(stored.items.count(), 1);
    assert!(stored.items.nasi);
    assert_eq!(stored.keterangan, Some(Keterangan::TidakMembawa));
}

#[test]
fn test_failed_entry_rolls_back_whole_batch() {
    let mut pool = memory_pool();
    assert!(ClassLogic::add(&pool.conn, "7A", None).is_success());
    assert!(StudentLogic::add(&pool.conn, "Budi", 1).is_success());

    let entries = vec![
        DailyLogEntry::new(1, may_first(), MenuItems::all()),
        DailyLogEntry::new(99, may_first(), MenuItems::all()),
    ];
    let res = MenuLogic::save_daily_logs(&mut pool.conn, &entries);
    assert!(!res.is_success());
    assert_eq!(res.error(), Some("Failed to save data to the database."));

    assert!(MenuLogic::find(&pool.conn, 1, &may_first()).unwrap().is_none());
}

#[test]
fn test_menu_command_logs_every_student_of_class() {
    let db_path = admin_db("menu_every_student");
    seed_school(&db_path);

    rsa()
        .args([
            "--db", &db_path, "--test", "--json", "menu", "7A", "--date", "2024-05-01", "--entry",
            "1=all", "--status", "2=TM",
        ])
        .assert()
        .success()
        .stdout(contains(r#""success":true"#))
        .stdout(contains(r#""count":2"#));

    rsa()
        .args(["--db", &db_path, "--test", "recap", "--month", "5", "--year", "2024"])
        .assert()
        .success()
        .stdout(contains("Budi"))
        .stdout(contains("Siti"))
        .stdout(contains("Andi").not());
}

#[test]
fn test_menu_rejects_student_of_other_class() {
    let db_path = admin_db("menu_other_class");
    seed_school(&db_path);

    rsa()
        .args(["--db", &db_path, "--test", "menu", "7A", "--entry", "3=all"])
        .assert()
        .failure()
        .stderr(contains("not a student of class 7A"));
}
