mod common;
use chrono::NaiveDate;
use common::{admin_db, memory_pool, rsa, seed_school};
use predicates::prelude::*;
use predicates::str::contains;
use rsarapan::core::classes::ClassLogic;
use rsarapan::core::menu::MenuLogic;
use rsarapan::core::students::StudentLogic;
use rsarapan::models::{DailyLogEntry, MenuItems};

#[test]
fn test_duplicate_class_name_fails_generically() {
    let pool = memory_pool();
    assert!(ClassLogic::add(&pool.conn, "7A", Some("  ")).is_success());

    let dup = ClassLogic::add(&pool.conn, "7A", None);
    assert_eq!(
        dup.error(),
        Some("Failed to add class (the name may already exist).")
    );

    let list = ClassLogic::list(&pool.conn).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].class.homeroom_teacher, None, "blank teacher stored as NULL");
}

#[test]
fn test_deleting_class_cascades_to_students_and_logs() {
    let mut pool = memory_pool();
    assert!(ClassLogic::add(&pool.conn, "7A", None).is_success());
    assert!(ClassLogic::add(&pool.conn, "7B", None).is_success());
    assert!(StudentLogic::add(&pool.conn, "Budi", 1).is_success());
    assert!(StudentLogic::add(&pool.conn, "Andi", 2).is_success());

    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let entries = vec![DailyLogEntry::new(1, date, MenuItems::all())];
    assert!(MenuLogic::save_daily_logs(&mut pool.conn, &entries).is_success());

    assert!(ClassLogic::delete(&pool.conn, 1).is_success());

    let left = StudentLogic::list(&pool.conn, None).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].name, "Andi");
    assert!(MenuLogic::find(&pool.conn, 1, &date).unwrap().is_none());

    assert!(!ClassLogic::delete(&pool.conn, 1).is_success());
}

#[test]
fn test_bulk_and_full_student_delete() {
    let pool = memory_pool();
    assert!(ClassLogic::add(&pool.conn, "7A", None).is_success());
    for name in ["A", "B", "C", "D"] {
        assert!(StudentLogic::add(&pool.conn, name, 1).is_success());
    }

    assert_eq!(StudentLogic::bulk_delete(&pool.conn, &[1, 3]).count(), Some(2));
    assert_eq!(StudentLogic::delete_all(&pool.conn).count(), Some(2));
    assert!(StudentLogic::list(&pool.conn, None).unwrap().is_empty());
}

#[test]
fn test_student_update_moves_class() {
    let pool = memory_pool();
    assert!(ClassLogic::add(&pool.conn, "7A", None).is_success());
    assert!(ClassLogic::add(&pool.conn, "7B", None).is_success());
    assert!(StudentLogic::add(&pool.conn, "Budi", 1).is_success());

    assert!(StudentLogic::update(&pool.conn, 1, "Budi S.", 2).is_success());
    let s = StudentLogic::get(&pool.conn, 1).unwrap();
    assert_eq!(s.name, "Budi S.");
    assert_eq!(s.class_name, "7B");

    assert!(!StudentLogic::update(&pool.conn, 9, "X", 1).is_success());
}

#[test]
fn test_class_and_student_commands() {
    let db_path = admin_db("class_student_cli");
    seed_school(&db_path);

    rsa()
        .args(["--db", &db_path, "--test", "class", "list"])
        .assert()
        .success()
        .stdout(contains("Ibu Sari"))
        .stdout(contains("7B"));

    rsa()
        .args(["--db", &db_path, "--test", "class", "edit", "1", "--teacher", ""])
        .assert()
        .success();

    rsa()
        .args(["--db", &db_path, "--test", "class", "list"])
        .assert()
        .success()
        .stdout(contains("Ibu Sari").not());

    rsa()
        .args(["--db", &db_path, "--test", "student", "list", "--class", "7B"])
        .assert()
        .success()
        .stdout(contains("Andi"))
        .stdout(contains("Budi").not());

    rsa()
        .args(["--db", &db_path, "--test", "--json", "student", "del", "1", "2"])
        .assert()
        .success()
        .stdout(contains(r#""count":2"#));

    rsa()
        .args(["--db", &db_path, "--test", "--json", "class", "del", "--all"])
        .assert()
        .success()
        .stdout(contains(r#""count":2"#));

    rsa()
        .args(["--db", &db_path, "--test", "student", "list"])
        .assert()
        .success()
        .stdout(contains("No students found."));
}
