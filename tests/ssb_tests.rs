mod common;
use chrono::NaiveDate;
use common::{admin_db, memory_pool, rsa, seed_school};
use predicates::str::contains;
use rsarapan::core::classes::ClassLogic;
use rsarapan::core::ssb::{RollCall, SsbLogic};
use rsarapan::core::students::StudentLogic;
use rsarapan::models::AttendanceMark;
use rusqlite::Connection;

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))
        .unwrap()
}

#[test]
fn test_repeated_saves_keep_one_event_and_one_mark_per_student() {
    let mut pool = memory_pool();
    assert!(ClassLogic::add(&pool.conn, "7A", None).is_success());
    assert!(StudentLogic::add(&pool.conn, "Budi", 1).is_success());
    assert!(StudentLogic::add(&pool.conn, "Siti", 1).is_success());

    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let first = [AttendanceMark::new(1, true), AttendanceMark::new(2, false)];
    assert_eq!(SsbLogic::save_attendance(&mut pool.conn, date, &first).count(), Some(2));

    let second = [AttendanceMark::new(1, false), AttendanceMark::new(2, true)];
    assert!(SsbLogic::save_attendance(&mut pool.conn, date, &second).is_success());

    assert_eq!(count(&pool.conn, "breakfast_events"), 1);
    assert_eq!(count(&pool.conn, "breakfast_attendance"), 2);

    let marks = SsbLogic::load(&pool.conn, &date).unwrap();
    assert!(marks.contains(&AttendanceMark::new(1, false)));
    assert!(marks.contains(&AttendanceMark::new(2, true)));
}

#[test]
fn test_failed_mark_rolls_back_event() {
    let mut pool = memory_pool();
    let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();

    let res = SsbLogic::save_attendance(&mut pool.conn, date, &[AttendanceMark::new(42, true)]);
    assert_eq!(res.error(), Some("Failed to save SSB attendance."));
    assert_eq!(count(&pool.conn, "breakfast_events"), 0);
}

#[test]
fn test_ssb_command_marks_unlisted_students_absent() {
    let db_path = admin_db("ssb_unlisted_absent");
    seed_school(&db_path);

    rsa()
        .args(["--db", &db_path, "--test", "ssb", "7A", "--date", "2024-05-01", "--present", "2"])
        .assert()
        .success()
        .stdout(contains("1/2 present"));

    rsa()
        .args(["--db", &db_path, "--test", "dashboard", "--date", "2024-05-01"])
        .assert()
        .success()
        .stdout(contains("1/2 present"));
}

#[test]
fn test_roll_call_defaults_to_whole_class_present() {
    let pool = memory_pool();
    assert!(ClassLogic::add(&pool.conn, "7A", None).is_success());
    assert!(StudentLogic::add(&pool.conn, "Budi", 1).is_success());
    assert!(StudentLogic::add(&pool.conn, "Siti", 1).is_success());
    let class = ClassLogic::resolve(&pool.conn, "7A").unwrap();

    let everyone = SsbLogic::marks_for_class(&pool.conn, &class, &RollCall::Absent(vec![])).unwrap();
    assert!(everyone.iter().all(|m| m.is_present));

    let marks = SsbLogic::marks_for_class(&pool.conn, &class, &RollCall::Absent(vec![1])).unwrap();
    assert!(marks.contains(&AttendanceMark::new(1, false)));
    assert!(marks.contains(&AttendanceMark::new(2, true)));

    assert!(SsbLogic::marks_for_class(&pool.conn, &class, &RollCall::Absent(vec![99])).is_err());
}

#[test]
fn test_ssb_command_without_flags_marks_everyone_present() {
    let db_path = admin_db("ssb_all_present");
    seed_school(&db_path);

    rsa()
        .args(["--db", &db_path, "--test", "ssb", "7A", "--date", "2024-05-01"])
        .assert()
        .success()
        .stdout(contains("2/2 present"));
}

#[test]
fn test_ssb_command_absent_unticks_students() {
    let db_path = admin_db("ssb_absent");
    seed_school(&db_path);

    rsa()
        .args(["--db", &db_path, "--test", "ssb", "7A", "--date", "2024-05-01", "--absent", "1"])
        .assert()
        .success()
        .stdout(contains("1/2 present"));

    rsa()
        .args([
            "--db", &db_path, "--test", "ssb", "7A", "--present", "1", "--absent", "2",
        ])
        .assert()
        .failure();
}
