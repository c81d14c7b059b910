mod common;
use common::{admin_db, memory_pool, rsa, temp_input};
use predicates::str::contains;
use rsarapan::core::classes::ClassLogic;
use rsarapan::core::students::StudentLogic;
use rsarapan::import::sheet::{read_csv, read_json};
use rsarapan::import::{ClassRow, RowOutcome, StudentRow, import_classes, import_students, reconcile_classes};

#[test]
fn test_class_import_updates_teacher_and_is_idempotent() {
    let pool = memory_pool();
    assert!(ClassLogic::add(&pool.conn, "7A", Some("Lama")).is_success());

    let rows = vec![ClassRow::new("7A", Some("Ibu Sari")), ClassRow::new("7B", None)];

    let first = import_classes(&pool.conn, &rows);
    assert!(first.is_success());
    assert_eq!(first.count(), Some(2));
    assert_eq!(first.message(), None);

    let second = reconcile_classes(&pool.conn, &rows);
    assert_eq!(second.rows[0].1, RowOutcome::Updated);
    assert_eq!(second.rows[1].1, RowOutcome::Unchanged);
    assert_eq!(second.success_count(), 2);

    let classes = ClassLogic::list(&pool.conn).unwrap();
    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0].class.homeroom_teacher.as_deref(), Some("Ibu Sari"));
    assert_eq!(classes[1].class.homeroom_teacher, None);
}

#[test]
fn test_class_import_without_rows_fails() {
    let pool = memory_pool();
    let res = import_classes(&pool.conn, &[]);
    assert_eq!(res.error(), Some("Empty or invalid data."));
}

#[test]
fn test_student_import_resolves_class_case_insensitively() {
    let mut pool = memory_pool();
    assert!(ClassLogic::add(&pool.conn, "7A", None).is_success());

    let rows = vec![StudentRow::new("Budi", "7a"), StudentRow::new("Siti", " 7A ")];
    let res = import_students(&mut pool.conn, &rows);
    assert!(res.is_success());
    assert_eq!(res.count(), Some(2));
    assert!(res.errors().is_empty());

    let students = StudentLogic::list(&pool.conn, None).unwrap();
    assert_eq!(students.len(), 2);
    assert!(students.iter().all(|s| s.class_name == "7A"));
}

#[test]
fn test_student_import_reports_unknown_class() {
    let mut pool = memory_pool();
    assert!(ClassLogic::add(&pool.conn, "7A", None).is_success());

    let rows = vec![StudentRow::new("Budi", "7A"), StudentRow::new("Rudi", "9Z")];
    let res = import_students(&mut pool.conn, &rows);
    assert!(res.is_success());
    assert_eq!(res.count(), Some(1));
    assert_eq!(res.errors().len(), 1);
    assert!(res.errors()[0].contains("Rudi"));
    assert!(res.errors()[0].contains("9Z"));

    let names: Vec<String> = StudentLogic::list(&pool.conn, None)
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, ["Budi"]);
}

#[test]
fn test_sheet_header_aliases() {
    let csv = "\u{feff}Kelas,Wali\n7A,Ibu Sari\n,Tanpa Nama\n7B,\n";
    let rows = ClassRow::from_sheet(&read_csv(csv.as_bytes()).unwrap());
    assert_eq!(
        rows,
        vec![ClassRow::new("7A", Some("Ibu Sari")), ClassRow::new("7B", None)]
    );

    let json = r#"[
        {"name": "Budi", "className": "7A"},
        {"Nama Siswa": "Siti", "Nama": "ignored", "Kelas": "7B"},
        {"Nama Siswa": "Tanpa Kelas"}
    ]"#;
    let rows = StudentRow::from_sheet(&read_json(json).unwrap());
    assert_eq!(
        rows,
        vec![StudentRow::new("Budi", "7A"), StudentRow::new("Siti", "7B")]
    );
}

#[test]
fn test_import_commands_end_to_end() {
    let db_path = admin_db("import_end_to_end");

    let classes = temp_input("import_end_to_end_classes", "csv", "Nama Kelas,Wali Kelas\n7A,Ibu Sari\n");
    rsa()
        .args(["--db", &db_path, "--test", "--json", "import", "classes", "--file", &classes])
        .assert()
        .success()
        .stdout(contains(r#"{"success":true,"count":1,"errors":[]}"#));

    let students = temp_input(
        "import_end_to_end_students",
        "csv",
        "Nama Siswa,Kelas\nBudi,7A\nSiti,7A\nRudi,9Z\n",
    );
    rsa()
        .args(["--db", &db_path, "--test", "--json", "import", "students", "--file", &students])
        .assert()
        .success()
        .stdout(contains(r#""count":2"#))
        .stdout(contains("Class '9Z' not found for student 'Rudi'"));

    let empty = temp_input("import_end_to_end_empty", "csv", "Nama Kelas,Wali Kelas\n");
    rsa()
        .args(["--db", &db_path, "--test", "--json", "import", "classes", "--file", &empty])
        .assert()
        .failure()
        .stdout(contains(r#"{"success":false,"error":"Empty or invalid data."}"#));
}

#[test]
fn test_import_rejects_unknown_extension() {
    let db_path = admin_db("import_bad_ext");
    let file = temp_input("import_bad_ext", "txt", "Nama Kelas\n7A\n");
    rsa()
        .args(["--db", &db_path, "--test", "import", "classes", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("expected .csv or .json"));
}

#[test]
fn test_class_import_cleans_rows() {
    let pool = memory_pool();
    assert!(ClassLogic::add(&pool.conn, "7A", Some("Budi")).is_success());

    let res = import_classes(&pool.conn, &[ClassRow::new("7A", Some(""))]);
    assert!(res.is_success());
    let classes = ClassLogic::list(&pool.conn).unwrap();
    assert_eq!(classes[0].class.homeroom_teacher.as_deref(), Some("Budi"));

    let res = import_classes(&pool.conn, &[ClassRow::new(" 7A ", None), ClassRow::new("", None)]);
    assert_eq!(res.count(), Some(1));
    let names: Vec<String> = ClassLogic::list(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|c| c.class.name)
        .collect();
    assert_eq!(names, ["7A"]);

    let res = import_classes(&pool.conn, &[ClassRow::new("  ", Some("Siti"))]);
    assert_eq!(res.error(), Some("Empty or invalid data."));
}

#[test]
fn test_class_import_later_row_wins_within_one_batch() {
    let pool = memory_pool();

    let rows = vec![ClassRow::new("7A", Some("Budi")), ClassRow::new("7A", Some("Siti"))];
    let res = import_classes(&pool.conn, &rows);
    assert_eq!(res.count(), Some(2));

    let classes = ClassLogic::list(&pool.conn).unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].class.homeroom_teacher.as_deref(), Some("Siti"));
}

#[test]
fn test_class_import_keeps_going_after_a_failing_row() {
    let pool = memory_pool();
    pool.conn
        .execute_batch(
            "CREATE TRIGGER reject_bad_class BEFORE INSERT ON classes
             WHEN NEW.name = 'BAD'
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .unwrap();

    let res = import_classes(&pool.conn, &[ClassRow::new("7A", None), ClassRow::new("BAD", None)]);
    assert!(res.is_success());
    assert_eq!(res.count(), Some(1));
    assert_eq!(res.message(), Some("Success: 1. Failed: 1"));
    assert_eq!(res.errors().len(), 1);

    let res = import_classes(&pool.conn, &[ClassRow::new("BAD", None)]);
    assert!(!res.is_success());
    assert!(res.error().unwrap().starts_with("Failed to process class BAD"));
    assert_eq!(ClassLogic::list(&pool.conn).unwrap().len(), 1);
}

#[test]
fn test_student_import_batch_is_all_or_nothing() {
    let mut pool = memory_pool();
    assert!(ClassLogic::add(&pool.conn, "7A", None).is_success());
    pool.conn
        .execute_batch(
            "CREATE TRIGGER reject_bad_student BEFORE INSERT ON students
             WHEN NEW.name = 'Rusak'
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .unwrap();

    let rows = vec![StudentRow::new("Budi", "7A"), StudentRow::new("Rusak", "7A")];
    let res = import_students(&mut pool.conn, &rows);
    assert_eq!(res.error(), Some("Failed to import student data."));
    assert!(StudentLogic::list(&pool.conn, None).unwrap().is_empty());
}
