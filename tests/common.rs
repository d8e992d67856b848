#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklocation")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklocation.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklocation_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB with the Week rows of 2024 only.
pub fn init_db_2024(db_path: &str) {
    wl().args([
        "--db",
        db_path,
        "--test",
        "init",
        "--start-year",
        "2024",
        "--years",
        "1",
    ])
    .assert()
    .success();
}

/// Initialized 2024 DB with office on 2024-11-25.
pub fn init_db_with_data(db_path: &str) {
    init_db_2024(db_path);

    wl().args(["--db", db_path, "add", "2024-11-25", "office"])
        .assert()
        .success();
}
