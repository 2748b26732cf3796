use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the four timesheet tables with the modern schema.
fn create_timesheet_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            username   TEXT UNIQUE NOT NULL,
            password   TEXT NOT NULL,
            role       TEXT NOT NULL CHECK(role IN ('admin','operator')),
            company_id INTEGER,
            active     INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS companies (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            company_name TEXT UNIQUE NOT NULL
        );

        CREATE TABLE IF NOT EXISTS timesheets (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id         INTEGER NOT NULL,
            date            TEXT NOT NULL,
            task            TEXT NOT NULL DEFAULT '',
            start_time      TEXT NOT NULL,
            end_time        TEXT NOT NULL,
            break_minutes   INTEGER NOT NULL DEFAULT 0,
            billable        INTEGER NOT NULL DEFAULT 0,
            rate_per_hour   REAL NOT NULL DEFAULT 0,
            billable_amount REAL,
            company_id      INTEGER,
            status          TEXT NOT NULL DEFAULT 'pending'
        );

        CREATE TABLE IF NOT EXISTS comments (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            timesheet_id   INTEGER NOT NULL,
            user_id        INTEGER NOT NULL,
            commenter_role TEXT NOT NULL,
            comment        TEXT NOT NULL,
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_timesheets_date ON timesheets(date);
        CREATE INDEX IF NOT EXISTS idx_timesheets_user ON timesheets(user_id);
        CREATE INDEX IF NOT EXISTS idx_comments_timesheet ON comments(timesheet_id);
        "#,
    )?;
    Ok(())
}

/// Guarded column-add migration: applied once, recorded in the log table.
fn apply_column_migration(
    conn: &Connection,
    version: &str,
    table: &str,
    column: &str,
    alter_sql: &str,
    message: &str,
) -> Result<()> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if !has_column(conn, table, column)? {
        conn.execute(alter_sql, [])?;
        success(format!("Migration applied: {}", version));
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create missing tables (idempotent)
    let fresh = !table_exists(conn, "timesheets")?;
    create_timesheet_tables(conn)?;

    if fresh {
        success("Created timesheet tables (modern schema).");
        return Ok(());
    }

    // 3) Legacy upgrades: pre-1.x databases lacked users.active and
    //    timesheets.status
    apply_column_migration(
        conn,
        "20240312_0001_add_user_active_flag",
        "users",
        "active",
        "ALTER TABLE users ADD COLUMN active INTEGER NOT NULL DEFAULT 1;",
        "Added active flag to users",
    )?;

    apply_column_migration(
        conn,
        "20240312_0002_add_timesheet_status",
        "timesheets",
        "status",
        "ALTER TABLE timesheets ADD COLUMN status TEXT NOT NULL DEFAULT 'pending';",
        "Added status to timesheets",
    )?;

    Ok(())
}
