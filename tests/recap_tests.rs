mod common;
use chrono::NaiveDate;
use common::memory_pool;
use rsarapan::core::classes::ClassLogic;
use rsarapan::core::menu::MenuLogic;
use rsarapan::core::recap::RecapLogic;
use rsarapan::core::students::StudentLogic;
use rsarapan::errors::AppError;
use rsarapan::models::{DailyLogEntry, DayStatus, Keterangan, MenuItem, MenuItems};
use rusqlite::Connection;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// 7A with Budi (1) and Siti (2).
fn seed(conn: &Connection) {
    assert!(ClassLogic::add(conn, "7A", Some("Ibu Sari")).is_success());
    assert!(StudentLogic::add(conn, "Budi", 1).is_success());
    assert!(StudentLogic::add(conn, "Siti", 1).is_success());
}

fn save(conn: &mut Connection, entries: Vec<DailyLogEntry>) {
    assert!(MenuLogic::save_daily_logs(conn, &entries).is_success());
}

#[test]
fn test_month_bounds_cover_every_month_length() {
    let cases = [
        (2, 2023, 28),
        (2, 2024, 29),
        (4, 2024, 30),
        (12, 2024, 31),
        (1, 2025, 31),
    ];
    for (month, year, last) in cases {
        let (start, end) = RecapLogic::range(month, year).unwrap();
        assert_eq!(start, d(year, month, 1));
        assert_eq!(end, d(year, month, last), "{year}-{month}");
    }
}

#[test]
fn test_recap_excludes_first_day_of_next_month() {
    let mut pool = memory_pool();
    seed(&pool.conn);
    save(
        &mut pool.conn,
        vec![
            DailyLogEntry::new(1, d(2024, 2, 29), MenuItems::all()),
            DailyLogEntry::new(1, d(2024, 3, 1), MenuItems::all()),
            DailyLogEntry::new(2, d(2024, 1, 31), MenuItems::all()),
        ],
    );

    let recap = RecapLogic::monthly(&pool.conn, 2, 2024).unwrap();
    assert_eq!(recap.len(), 1);
    assert_eq!(recap[0].student_name, "Budi");
    assert_eq!(recap[0].logs_by_day.len(), 1);
    assert_eq!(recap[0].status(29), Some(DayStatus::Complete));
}

#[test]
fn test_classification_and_missing_days() {
    let mut pool = memory_pool();
    seed(&pool.conn);
    save(
        &mut pool.conn,
        vec![
            DailyLogEntry::new(1, d(2024, 5, 1), MenuItems::all()),
            DailyLogEntry::new(1, d(2024, 5, 2), MenuItems::from_items(&[MenuItem::Nasi, MenuItem::Minum])),
            DailyLogEntry::new(1, d(2024, 5, 3), MenuItems::default()),
        ],
    );

    let recap = RecapLogic::monthly(&pool.conn, 5, 2024).unwrap();
    assert_eq!(recap.len(), 1, "students without logs produce no row");

    let budi = &recap[0];
    assert_eq!(budi.status(1), Some(DayStatus::Complete));
    assert_eq!(budi.status(2), Some(DayStatus::Partial));
    assert_eq!(budi.status(3), Some(DayStatus::None));
    assert_eq!(budi.status(4), None, "no log means no entry, not None");

    assert_eq!(budi.label(1), "Lengkap");
    assert_eq!(budi.label(2), "Kurang");
    assert_eq!(budi.label(3), "Tidak Membawa");
    assert_eq!(budi.label(4), "-");
}

#[test]
fn test_keterangan_does_not_change_classification() {
    let mut pool = memory_pool();
    seed(&pool.conn);
    save(
        &mut pool.conn,
        vec![
            DailyLogEntry::new(1, d(2024, 5, 6), MenuItems::default())
                .with_status(Some(Keterangan::TidakMasuk)),
            DailyLogEntry::new(2, d(2024, 5, 6), MenuItems::all())
                .with_status(Some(Keterangan::TidakMembawa)),
        ],
    );

    let recap = RecapLogic::monthly(&pool.conn, 5, 2024).unwrap();
    assert_eq!(recap[0].status(6), Some(DayStatus::None));
    assert_eq!(recap[1].status(6), Some(DayStatus::Complete));
}

#[test]
fn test_rows_follow_first_log_order() {
    let mut pool = memory_pool();
    seed(&pool.conn);
    save(
        &mut pool.conn,
        vec![
            DailyLogEntry::new(2, d(2024, 5, 2), MenuItems::all()),
            DailyLogEntry::new(1, d(2024, 5, 3), MenuItems::all()),
            DailyLogEntry::new(2, d(2024, 5, 4), MenuItems::all()),
        ],
    );

    let recap = RecapLogic::monthly(&pool.conn, 5, 2024).unwrap();
    let names: Vec<&str> = recap.iter().map(|r| r.student_name.as_str()).collect();
    assert_eq!(names, ["Siti", "Budi"]);
    assert_eq!(recap[0].class_name, "7A");
    assert_eq!(recap[0].logs_by_day.len(), 2);
}

#[test]
fn test_invalid_month_is_rejected() {
    let pool = memory_pool();
    assert!(matches!(
        RecapLogic::monthly(&pool.conn, 13, 2024),
        Err(AppError::InvalidMonth(_))
    ));
}
