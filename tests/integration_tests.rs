use predicates::str::contains;

mod common;
use common::{add_entry, create_and_login_operator, init_and_login, setup_env, ts};

#[test]
fn test_init_creates_schema_and_seeds_admin() {
    let (home, db) = setup_env("init_seed");

    ts(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // Seeded admin can log in right away
    ts(&home)
        .args([
            "--db", &db, "login", "--username", "admin", "--password", "Admin@123",
        ])
        .assert()
        .success()
        .stdout(contains("Logged in as admin"));
}

#[test]
fn test_init_is_idempotent() {
    let (home, db) = setup_env("init_twice");

    ts(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    ts(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_login_unknown_user_fails() {
    let (home, db) = setup_env("login_unknown");

    ts(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    ts(&home)
        .args([
            "--db", &db, "login", "--username", "ghost", "--password", "whatever",
        ])
        .assert()
        .failure()
        .stderr(contains("User not found"));
}

#[test]
fn test_login_wrong_password_fails() {
    let (home, db) = setup_env("login_wrong_pw");

    ts(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    ts(&home)
        .args([
            "--db", &db, "login", "--username", "admin", "--password", "nope",
        ])
        .assert()
        .failure()
        .stderr(contains("Incorrect password"));
}

#[test]
fn test_commands_require_login() {
    let (home, db) = setup_env("no_session");

    ts(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    ts(&home)
        .args([
            "--db", &db, "add", "2025-06-01", "--task", "work", "--start", "09:00",
            "--end", "17:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_logout_clears_session() {
    let (home, db) = setup_env("logout");
    init_and_login(&home, &db);

    ts(&home)
        .args(["--db", &db, "logout"])
        .assert()
        .success();

    ts(&home)
        .args(["--db", &db, "list"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_add_and_list_entry() {
    let (home, db) = setup_env("add_list");
    init_and_login(&home, &db);

    add_entry(&home, &db, "2025-06-01", "09:00", "17:00", "30", "500");

    ts(&home)
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("2025-06-01"))
        .stdout(contains("3750.00"))
        .stdout(contains("pending"));
}

#[test]
fn test_add_rejects_inverted_range() {
    let (home, db) = setup_env("add_inverted");
    init_and_login(&home, &db);

    ts(&home)
        .args([
            "--db", &db, "add", "2025-06-01", "--task", "work", "--start", "10:00",
            "--end", "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time range"));

    // Nothing was written
    ts(&home)
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("No entries found"));
}

#[test]
fn test_add_rejects_break_eating_whole_range() {
    let (home, db) = setup_env("add_break");
    init_and_login(&home, &db);

    ts(&home)
        .args([
            "--db", &db, "add", "2025-06-01", "--task", "work", "--start", "09:00",
            "--end", "10:00", "--break", "60",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time range"));
}

#[test]
fn test_add_rejects_bad_date() {
    let (home, db) = setup_env("add_bad_date");
    init_and_login(&home, &db);

    ts(&home)
        .args([
            "--db", &db, "add", "junk", "--task", "work", "--start", "09:00",
            "--end", "17:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_edit_recomputes_amount() {
    let (home, db) = setup_env("edit_amount");
    init_and_login(&home, &db);

    add_entry(&home, &db, "2025-06-01", "09:00", "17:00", "0", "100");

    ts(&home)
        .args(["--db", &db, "edit", "--id", "1", "--end", "13:00"])
        .assert()
        .success()
        .stdout(contains("400.00"));

    ts(&home)
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("400.00"));
}

#[test]
fn test_edit_rejects_inverted_result() {
    let (home, db) = setup_env("edit_inverted");
    init_and_login(&home, &db);

    add_entry(&home, &db, "2025-06-01", "09:00", "17:00", "0", "100");

    ts(&home)
        .args(["--db", &db, "edit", "--id", "1", "--end", "08:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time range"));
}

#[test]
fn test_del_removes_entry() {
    let (home, db) = setup_env("del_entry");
    init_and_login(&home, &db);

    add_entry(&home, &db, "2025-06-01", "09:00", "17:00", "0", "100");

    ts(&home)
        .args(["--db", &db, "del", "--id", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted entry 1"));

    ts(&home)
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("No entries found"));
}

#[test]
fn test_del_unknown_entry_fails() {
    let (home, db) = setup_env("del_missing");
    init_and_login(&home, &db);

    ts(&home)
        .args(["--db", &db, "del", "--id", "99"])
        .assert()
        .failure()
        .stderr(contains("No entry found with id 99"));
}

#[test]
fn test_list_period_filter() {
    let (home, db) = setup_env("list_period");
    init_and_login(&home, &db);

    add_entry(&home, &db, "2025-05-15", "09:00", "10:00", "0", "0");
    add_entry(&home, &db, "2025-06-15", "09:00", "10:00", "0", "0");

    let out = ts(&home)
        .args(["--db", &db, "list", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("2025-06-15"));

    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();
    assert!(!stdout.contains("2025-05-15"));
}

#[test]
fn test_approve_and_reject_flow() {
    let (home, db) = setup_env("approve_flow");
    init_and_login(&home, &db);

    add_entry(&home, &db, "2025-06-01", "09:00", "17:00", "0", "100");
    add_entry(&home, &db, "2025-06-02", "09:00", "17:00", "0", "100");

    ts(&home)
        .args(["--db", &db, "approve", "--id", "1"])
        .assert()
        .success()
        .stdout(contains("Entry 1 approved"));

    ts(&home)
        .args([
            "--db", &db, "approve", "--id", "2", "--reject", "--note", "wrong day",
        ])
        .assert()
        .success()
        .stdout(contains("Entry 2 rejected"));

    // The rejection note became an admin comment
    ts(&home)
        .args(["--db", &db, "comment", "list", "--entry", "2"])
        .assert()
        .success()
        .stdout(contains("wrong day"));

    ts(&home)
        .args(["--db", &db, "list", "--status", "approved"])
        .assert()
        .success()
        .stdout(contains("2025-06-01"));
}

#[test]
fn test_operator_cannot_approve() {
    let (home, db) = setup_env("operator_approve");
    init_and_login(&home, &db);

    add_entry(&home, &db, "2025-06-01", "09:00", "17:00", "0", "100");

    create_and_login_operator(&home, &db, "worker", "Secret@1");

    ts(&home)
        .args(["--db", &db, "approve", "--id", "1"])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));
}

#[test]
fn test_operator_sees_only_own_entries() {
    let (home, db) = setup_env("operator_visibility");
    init_and_login(&home, &db);

    add_entry(&home, &db, "2025-06-01", "09:00", "17:00", "0", "100");

    create_and_login_operator(&home, &db, "worker", "Secret@1");
    add_entry(&home, &db, "2025-06-02", "09:00", "12:00", "0", "50");

    let out = ts(&home)
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("2025-06-02"));

    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();
    assert!(!stdout.contains("2025-06-01"));
}

#[test]
fn test_operator_cannot_edit_foreign_entry() {
    let (home, db) = setup_env("operator_edit_foreign");
    init_and_login(&home, &db);

    add_entry(&home, &db, "2025-06-01", "09:00", "17:00", "0", "100");

    create_and_login_operator(&home, &db, "worker", "Secret@1");

    ts(&home)
        .args(["--db", &db, "edit", "--id", "1", "--task", "hijack"])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));
}

#[test]
fn test_user_management_requires_admin() {
    let (home, db) = setup_env("user_admin_only");
    init_and_login(&home, &db);

    create_and_login_operator(&home, &db, "worker", "Secret@1");

    ts(&home)
        .args([
            "--db", &db, "user", "create", "--username", "other", "--password", "x",
        ])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));
}

#[test]
fn test_deactivated_user_cannot_login() {
    let (home, db) = setup_env("deactivated_login");
    init_and_login(&home, &db);

    ts(&home)
        .args([
            "--db", &db, "user", "create", "--username", "worker", "--password", "Secret@1",
        ])
        .assert()
        .success();

    // Seeded admin has id 1, the new user id 2
    ts(&home)
        .args(["--db", &db, "user", "edit", "--id", "2", "--deactivate"])
        .assert()
        .success();

    ts(&home)
        .args([
            "--db", &db, "login", "--username", "worker", "--password", "Secret@1",
        ])
        .assert()
        .failure()
        .stderr(contains("User is deactivated"));
}

#[test]
fn test_passwd_changes_own_password() {
    let (home, db) = setup_env("passwd");
    init_and_login(&home, &db);

    ts(&home)
        .args(["--db", &db, "passwd", "--old", "Admin@123", "--new", "Fresh@456"])
        .assert()
        .success()
        .stdout(contains("Password changed"));

    ts(&home)
        .args([
            "--db", &db, "login", "--username", "admin", "--password", "Fresh@456",
        ])
        .assert()
        .success();

    ts(&home)
        .args([
            "--db", &db, "login", "--username", "admin", "--password", "Admin@123",
        ])
        .assert()
        .failure()
        .stderr(contains("Incorrect password"));
}

#[test]
fn test_passwd_rejects_wrong_old_password() {
    let (home, db) = setup_env("passwd_wrong_old");
    init_and_login(&home, &db);

    ts(&home)
        .args(["--db", &db, "passwd", "--old", "nope", "--new", "Fresh@456"])
        .assert()
        .failure()
        .stderr(contains("Incorrect password"));
}

#[test]
fn test_company_add_and_entry_reference() {
    let (home, db) = setup_env("company_ref");
    init_and_login(&home, &db);

    ts(&home)
        .args(["--db", &db, "company", "add", "--name", "Acme"])
        .assert()
        .success()
        .stdout(contains("Registered company 'Acme'"));

    ts(&home)
        .args([
            "--db", &db, "add", "2025-06-01", "--task", "work", "--start", "09:00",
            "--end", "17:00", "--company", "1",
        ])
        .assert()
        .success();

    ts(&home)
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("Acme"));

    // Unknown company id is refused
    ts(&home)
        .args([
            "--db", &db, "add", "2025-06-02", "--task", "work", "--start", "09:00",
            "--end", "17:00", "--company", "99",
        ])
        .assert()
        .failure()
        .stderr(contains("No company found with id 99"));
}

#[test]
fn test_comment_add_and_list() {
    let (home, db) = setup_env("comments");
    init_and_login(&home, &db);

    add_entry(&home, &db, "2025-06-01", "09:00", "17:00", "0", "100");

    ts(&home)
        .args([
            "--db", &db, "comment", "add", "--entry", "1", "--text", "looks fine",
        ])
        .assert()
        .success();

    ts(&home)
        .args(["--db", &db, "comment", "list", "--entry", "1"])
        .assert()
        .success()
        .stdout(contains("looks fine"))
        .stdout(contains("admin"));
}

#[test]
fn test_dashboard_renders_sections() {
    let (home, db) = setup_env("dashboard");
    init_and_login(&home, &db);

    add_entry(&home, &db, "2025-06-01", "09:00", "17:00", "30", "500");

    ts(&home)
        .args(["--db", &db, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Dashboard"))
        .stdout(contains("Hours per user"))
        .stdout(contains("Billable split"))
        .stdout(contains("last six months"))
        .stdout(contains("admin"));
}

#[test]
fn test_dashboard_empty_database() {
    let (home, db) = setup_env("dashboard_empty");
    init_and_login(&home, &db);

    ts(&home)
        .args(["--db", &db, "dashboard"])
        .assert()
        .success()
        .stdout(contains("no entries"));
}

#[test]
fn test_calendar_month_grid() {
    let (home, db) = setup_env("calendar_grid");
    init_and_login(&home, &db);

    add_entry(&home, &db, "2025-06-03", "09:00", "17:00", "0", "100");
    add_entry(&home, &db, "2025-06-03", "18:00", "19:00", "0", "100");

    ts(&home)
        .args(["--db", &db, "calendar", "--month", "2025-06"])
        .assert()
        .success()
        .stdout(contains("Jun 2025"))
        .stdout(contains("(2)"));
}

#[test]
fn test_calendar_day_view() {
    let (home, db) = setup_env("calendar_day");
    init_and_login(&home, &db);

    add_entry(&home, &db, "2025-06-03", "09:00", "17:00", "0", "100");

    ts(&home)
        .args(["--db", &db, "calendar", "--day", "2025-06-03"])
        .assert()
        .success()
        .stdout(contains("2025-06-03"))
        .stdout(contains("09:00 - 17:00"));

    ts(&home)
        .args(["--db", &db, "calendar", "--day", "2025-06-04"])
        .assert()
        .success()
        .stdout(contains("no entries"));
}

#[test]
fn test_db_check_and_info() {
    let (home, db) = setup_env("db_maintenance");
    init_and_login(&home, &db);

    ts(&home)
        .args(["--db", &db, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    ts(&home)
        .args(["--db", &db, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Users"));
}

#[test]
fn test_audit_log_records_operations() {
    let (home, db) = setup_env("audit_log");
    init_and_login(&home, &db);

    add_entry(&home, &db, "2025-06-01", "09:00", "17:00", "0", "100");

    ts(&home)
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("entry_add"))
        .stdout(contains("login"));
}
