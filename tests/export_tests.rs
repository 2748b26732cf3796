use predicates::str::contains;
use std::fs;

mod common;
use common::{add_entry, init_and_login, setup_env, temp_out, ts};

fn seed(home: &str, db: &str) {
    init_and_login(home, db);
    add_entry(home, db, "2025-05-10", "09:00", "17:00", "30", "500");
    add_entry(home, db, "2025-06-01", "09:00", "13:00", "0", "100");
}

#[test]
fn test_export_csv_all() {
    let (home, db) = setup_env("export_csv_all");
    seed(&home, &db);

    let out = temp_out("export_csv_all", "csv");

    ts(&home)
        .args(["--db", &db, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv file");
    assert!(content.contains("id,date,username,task"));
    assert!(content.contains("2025-05-10"));
    assert!(content.contains("2025-06-01"));
    assert!(content.contains("3750"));
}

#[test]
fn test_export_csv_respects_range() {
    let (home, db) = setup_env("export_csv_range");
    seed(&home, &db);

    let out = temp_out("export_csv_range", "csv");

    ts(&home)
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--range", "2025-06",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv file");
    assert!(content.contains("2025-06-01"));
    assert!(!content.contains("2025-05-10"));
}

#[test]
fn test_export_json_structure() {
    let (home, db) = setup_env("export_json");
    seed(&home, &db);

    let out = temp_out("export_json", "json");

    ts(&home)
        .args(["--db", &db, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("json file");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let arr = parsed.as_array().expect("array of entries");

    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["date"], "2025-05-10");
    assert_eq!(arr[0]["username"], "admin");
    assert_eq!(arr[0]["billable_amount"], 3750.0);
}

#[test]
fn test_export_xlsx_creates_file() {
    let (home, db) = setup_env("export_xlsx");
    seed(&home, &db);

    let out = temp_out("export_xlsx", "xlsx");

    ts(&home)
        .args(["--db", &db, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx file");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_pdf_creates_file() {
    let (home, db) = setup_env("export_pdf");
    seed(&home, &db);

    let out = temp_out("export_pdf", "pdf");

    ts(&home)
        .args(["--db", &db, "export", "--format", "pdf", "--file", &out])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("pdf file");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_rejects_relative_path() {
    let (home, db) = setup_env("export_relative");
    seed(&home, &db);

    ts(&home)
        .args(["--db", &db, "export", "--format", "csv", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_range_warns_and_writes_nothing() {
    let (home, db) = setup_env("export_empty_range");
    seed(&home, &db);

    let out = temp_out("export_empty_range", "csv");

    ts(&home)
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--range", "2020",
        ])
        .assert()
        .success()
        .stdout(contains("No entries found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let (home, db) = setup_env("export_force");
    seed(&home, &db);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "old content").unwrap();

    ts(&home)
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "-f",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("2025-05-10"));
}

#[test]
fn test_export_requires_login() {
    let (home, db) = setup_env("export_no_login");

    ts(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    let out = temp_out("export_no_login", "csv");

    ts(&home)
        .args(["--db", &db, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_backup_creates_copy() {
    let (home, db) = setup_env("backup_plain");
    seed(&home, &db);

    let out = temp_out("backup_plain", "sqlite");

    ts(&home)
        .args(["--db", &db, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let meta = fs::metadata(&out).expect("backup file");
    assert!(meta.len() > 0);
}

#[test]
fn test_backup_compress_produces_zip() {
    let (home, db) = setup_env("backup_zip");
    seed(&home, &db);

    let out = temp_out("backup_zip", "sqlite");
    let zipped = temp_out("backup_zip", "zip");

    ts(&home)
        .args(["--db", &db, "backup", "--file", &out, "--compress", "-f"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let bytes = fs::read(&zipped).expect("zip file");
    // zip local file header magic
    assert!(bytes.starts_with(b"PK"));
    // uncompressed intermediate copy is removed
    assert!(!std::path::Path::new(&out).exists());
}
