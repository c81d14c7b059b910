#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rsarapan::db::{DbPool, init_db};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsa() -> Command {
    cargo_bin_cmd!("rsarapan")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file (and its session file).
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsarapan.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(format!("{db_path}.session")).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write an input file (import sheets) into the temp dir.
pub fn temp_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_in.{}", name, ext));
    fs::write(&path, content).expect("write input file");
    path.to_string_lossy().to_string()
}

/// `init` in test mode: schema plus the default admin account.
pub fn init(db_path: &str) {
    rsa()
        .args(["--db", db_path, "--test", "init", "--password", "secret"])
        .assert()
        .success();
}

pub fn login(db_path: &str) {
    rsa()
        .args(["--db", db_path, "--test", "login", "--password", "secret"])
        .assert()
        .success();
}

/// Initialized and logged-in database.
pub fn admin_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    init(&db_path);
    login(&db_path);
    db_path
}

/// Library-level access: an in-memory database with the full schema.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::new(":memory:").expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// Small class/student fixture through the CLI:
/// 7A (Budi, Siti) and 7B (Andi).
pub fn seed_school(db_path: &str) {
    for (name, teacher) in [("7A", "Ibu Sari"), ("7B", "Bapak Joko")] {
        rsa()
            .args(["--db", db_path, "--test", "class", "add", name, "--teacher", teacher])
            .assert()
            .success();
    }
    for (name, class) in [("Budi", "7A"), ("Siti", "7A"), ("Andi", "7B")] {
        rsa()
            .args(["--db", db_path, "--test", "student", "add", name, "--class", class])
            .assert()
            .success();
    }
}
