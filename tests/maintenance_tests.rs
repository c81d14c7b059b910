mod common;
use common::{admin_db, init, rsa, setup_test_db};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_init_is_repeatable() {
    let db_path = setup_test_db("maintenance_init_twice");
    init(&db_path);

    rsa()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied").not());
}

#[test]
fn test_db_check_and_info() {
    let db_path = admin_db("maintenance_db");

    rsa()
        .args(["--db", &db_path, "--test", "db", "--check", "--info", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("0 applied"));
}

#[test]
fn test_log_print_shows_audit_trail() {
    let db_path = admin_db("maintenance_log");

    rsa()
        .args(["--db", &db_path, "--test", "class", "add", "7A"])
        .assert()
        .success();

    rsa()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("class_add"))
        .stdout(contains("login"));
}
