#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Command with HOME pointed at an isolated per-test directory so the
/// session and config files never touch the real user profile.
pub fn ts(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("tallysheet");
    cmd.env("HOME", home);
    cmd
}

/// Create an isolated home directory and a test DB path inside it,
/// removing any leftovers from a previous run.
pub fn setup_env(name: &str) -> (String, String) {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_tallysheet_home", name));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).unwrap();

    let db = home.join("test.sqlite");
    (
        home.to_string_lossy().to_string(),
        db.to_string_lossy().to_string(),
    )
}

/// Create a temporary output file path and ensure it does not exist yet.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema and log in as the seeded admin account.
pub fn init_and_login(home: &str, db: &str) {
    ts(home)
        .args(["--db", db, "--test", "init"])
        .assert()
        .success();

    ts(home)
        .args([
            "--db", db, "login", "--username", "admin", "--password", "Admin@123",
        ])
        .assert()
        .success();
}

/// Add one entry via the CLI for the logged-in user.
pub fn add_entry(home: &str, db: &str, date: &str, start: &str, end: &str, brk: &str, rate: &str) {
    ts(home)
        .args([
            "--db", db, "add", date, "--task", "work", "--start", start, "--end", end,
            "--break", brk, "--rate", rate,
        ])
        .assert()
        .success();
}

/// Create an operator account (requires a logged-in admin) and switch the
/// session to it.
pub fn create_and_login_operator(home: &str, db: &str, username: &str, password: &str) {
    ts(home)
        .args([
            "--db", db, "user", "create", "--username", username, "--password", password,
        ])
        .assert()
        .success();

    ts(home)
        .args([
            "--db", db, "login", "--username", username, "--password", password,
        ])
        .assert()
        .success();
}
