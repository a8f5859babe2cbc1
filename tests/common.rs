#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pclock() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
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

/// Initialize the schema on a throwaway database
pub fn init_db(db_path: &str) {
    pclock()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Register a default employee; the first one always gets id 1
pub fn add_employee(db_path: &str) {
    pclock()
        .args([
            "--db",
            db_path,
            "employee",
            "add",
            "--username",
            "jdoe",
            "--name",
            "John Doe",
            "--role",
            "analyst",
        ])
        .assert()
        .success();
}

/// Record a punch with a fixed client timestamp
pub fn punch_at(db_path: &str, employee: &str, ts: &str) {
    pclock()
        .args(["--db", db_path, "punch", employee, "--at", ts])
        .assert()
        .success();
}

/// Schema + one employee + a regular working day (Mon 2024-01-15, business clock)
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_employee(db_path);

    // 08:00 to 12:00 and 13:00 to 16:30 on the UTC-4 wall clock
    punch_at(db_path, "1", "2024-01-15T12:00:00Z");
    punch_at(db_path, "1", "2024-01-15T16:00:00Z");
    punch_at(db_path, "1", "2024-01-15T17:00:00Z");
    punch_at(db_path, "1", "2024-01-15T20:30:00Z");
}
