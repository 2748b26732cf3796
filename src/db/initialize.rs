use crate::auth;
use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine, then
/// seeds the default admin account.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    seed_admin(conn)?;
    Ok(())
}

/// Create the default `admin` account on first init. Password is Admin@123,
/// matching the documented first-login credentials.
fn seed_admin(conn: &Connection) -> AppResult<()> {
    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM users WHERE username = 'admin'",
            [],
            |row| row.get(0),
        )
        .optional()?;

    if existing.is_none() {
        let hash = auth::hash_password("Admin@123");
        conn.execute(
            "INSERT INTO users (username, password, role, active) VALUES ('admin', ?1, 'admin', 1)",
            [hash],
        )?;
        success("Seeded default admin user (password: Admin@123).");
    }

    Ok(())
}
