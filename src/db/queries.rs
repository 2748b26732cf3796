use crate::errors::{AppError, AppResult};
use crate::models::comment::Comment;
use crate::models::company::Company;
use crate::models::entry::{EntryRecord, NewEntry};
use crate::models::status::Status;
use crate::models::user::{Role, User};
use rusqlite::{Connection, OptionalExtension, Row, params};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

fn map_user_row(row: &Row) -> rusqlite::Result<User> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRole(role_str.clone())),
        )
    })?;

    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        role,
        company_id: row.get("company_id")?,
        active: row.get::<_, i64>("active")? == 1,
        company_name: row.get("company_name")?,
    })
}

pub fn insert_user(
    conn: &Connection,
    username: &str,
    password_hash: &str,
    role: Role,
    company_id: Option<i64>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (username, password, role, company_id, active)
         VALUES (?1, ?2, ?3, ?4, 1)",
        params![username, password_hash, role.to_db_str(), company_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_users(conn: &Connection) -> AppResult<Vec<User>> {
    let mut stmt = conn.prepare(
        "SELECT u.id, u.username, u.role, u.company_id, u.active, c.company_name
         FROM users u LEFT JOIN companies c ON c.id = u.company_id
         ORDER BY u.id DESC",
    )?;

    let rows = stmt.query_map([], map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Look up a user by username together with the stored password hash.
/// Used by the login flow only.
pub fn find_user_for_login(
    conn: &Connection,
    username: &str,
) -> AppResult<Option<(User, String)>> {
    let mut stmt = conn.prepare(
        "SELECT u.id, u.username, u.role, u.company_id, u.active, u.password,
                c.company_name
         FROM users u LEFT JOIN companies c ON c.id = u.company_id
         WHERE u.username = ?1",
    )?;

    let found = stmt
        .query_row([username], |row| {
            let user = map_user_row(row)?;
            let hash: String = row.get("password")?;
            Ok((user, hash))
        })
        .optional()?;

    Ok(found)
}

pub fn get_user(conn: &Connection, id: i64) -> AppResult<User> {
    let mut stmt = conn.prepare(
        "SELECT u.id, u.username, u.role, u.company_id, u.active, c.company_name
         FROM users u LEFT JOIN companies c ON c.id = u.company_id
         WHERE u.id = ?1",
    )?;

    stmt.query_row([id], map_user_row)
        .optional()?
        .ok_or_else(|| AppError::UserNotFound(format!("id {}", id)))
}

pub fn get_user_password(conn: &Connection, id: i64) -> AppResult<String> {
    conn.query_row("SELECT password FROM users WHERE id = ?1", [id], |row| {
        row.get(0)
    })
    .optional()?
    .ok_or_else(|| AppError::UserNotFound(format!("id {}", id)))
}

pub fn update_user(
    conn: &Connection,
    id: i64,
    username: &str,
    role: Role,
    company_id: Option<i64>,
    active: bool,
) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE users SET username = ?1, role = ?2, company_id = ?3, active = ?4
         WHERE id = ?5",
        params![
            username,
            role.to_db_str(),
            company_id,
            if active { 1 } else { 0 },
            id
        ],
    )?;
    if changed == 0 {
        return Err(AppError::UserNotFound(format!("id {}", id)));
    }
    Ok(())
}

pub fn set_user_password(conn: &Connection, id: i64, password_hash: &str) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE users SET password = ?1 WHERE id = ?2",
        params![password_hash, id],
    )?;
    if changed == 0 {
        return Err(AppError::UserNotFound(format!("id {}", id)));
    }
    Ok(())
}

/// Delete a user together with their timesheets.
pub fn delete_user(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM users WHERE id = ?1", [id])?;
    conn.execute("DELETE FROM timesheets WHERE user_id = ?1", [id])?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Companies
// ---------------------------------------------------------------------------

pub fn insert_company(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO companies (company_name) VALUES (?1)",
        [name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_companies(conn: &Connection) -> AppResult<Vec<Company>> {
    let mut stmt =
        conn.prepare("SELECT id, company_name FROM companies ORDER BY company_name ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(Company {
            id: row.get(0)?,
            company_name: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_company(conn: &Connection, id: i64) -> AppResult<Company> {
    conn.query_row(
        "SELECT id, company_name FROM companies WHERE id = ?1",
        [id],
        |row| {
            Ok(Company {
                id: row.get(0)?,
                company_name: row.get(1)?,
            })
        },
    )
    .optional()?
    .ok_or(AppError::CompanyNotFound(id))
}

// ---------------------------------------------------------------------------
// Timesheets
// ---------------------------------------------------------------------------

const ENTRY_SELECT: &str = "SELECT t.id, t.user_id, u.username, t.date, t.task,
        t.start_time, t.end_time, t.break_minutes, t.billable, t.rate_per_hour,
        t.billable_amount, t.company_id, c.company_name, t.status
     FROM timesheets t
     LEFT JOIN users u ON u.id = t.user_id
     LEFT JOIN companies c ON c.id = t.company_id";

pub fn map_entry_row(row: &Row) -> rusqlite::Result<EntryRecord> {
    let status_str: String = row.get("status")?;

    Ok(EntryRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        username: row.get("username")?,
        date: row.get("date")?,
        task: row.get("task")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        break_minutes: row.get::<_, Option<i64>>("break_minutes")?.unwrap_or(0),
        billable: row.get::<_, Option<i64>>("billable")?.unwrap_or(0) == 1,
        rate_per_hour: row.get::<_, Option<f64>>("rate_per_hour")?.unwrap_or(0.0),
        billable_amount: row.get("billable_amount")?,
        company_id: row.get("company_id")?,
        company_name: row.get("company_name")?,
        // Unknown status values degrade to pending rather than failing the read
        status: Status::from_db_str(&status_str).unwrap_or_default(),
    })
}

pub fn insert_entry(conn: &Connection, entry: &NewEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO timesheets
         (user_id, date, task, start_time, end_time, break_minutes, billable,
          rate_per_hour, billable_amount, company_id, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            entry.user_id,
            entry.date,
            entry.task,
            entry.start_time,
            entry.end_time,
            entry.break_minutes,
            if entry.billable { 1 } else { 0 },
            entry.rate_per_hour,
            entry.billable_amount,
            entry.company_id,
            entry.status.to_db_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Bulk read of all entries, most recent date first.
pub fn load_all_entries(conn: &Connection) -> AppResult<Vec<EntryRecord>> {
    let mut stmt = conn.prepare(&format!("{} ORDER BY t.date DESC, t.id DESC", ENTRY_SELECT))?;

    let rows = stmt.query_map([], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entries_by_user(conn: &Connection, user_id: i64) -> AppResult<Vec<EntryRecord>> {
    let mut stmt = conn.prepare(&format!(
        "{} WHERE t.user_id = ?1 ORDER BY t.date DESC, t.id DESC",
        ENTRY_SELECT
    ))?;

    let rows = stmt.query_map([user_id], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_entry(conn: &Connection, id: i64) -> AppResult<EntryRecord> {
    let mut stmt = conn.prepare(&format!("{} WHERE t.id = ?1", ENTRY_SELECT))?;

    stmt.query_row([id], map_entry_row)
        .optional()?
        .ok_or(AppError::EntryNotFound(id))
}

/// Update an entry (all fields except id and user_id).
pub fn update_entry(conn: &Connection, entry: &EntryRecord) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE timesheets SET
         date = ?1, task = ?2, start_time = ?3, end_time = ?4,
         break_minutes = ?5, billable = ?6, rate_per_hour = ?7,
         billable_amount = ?8, company_id = ?9, status = ?10
         WHERE id = ?11",
        params![
            entry.date,
            entry.task,
            entry.start_time,
            entry.end_time,
            entry.break_minutes,
            if entry.billable { 1 } else { 0 },
            entry.rate_per_hour,
            entry.billable_amount,
            entry.company_id,
            entry.status.to_db_str(),
            entry.id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::EntryNotFound(entry.id));
    }
    Ok(())
}

/// Delete an entry together with its comments.
pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM timesheets WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    conn.execute("DELETE FROM comments WHERE timesheet_id = ?1", [id])?;
    Ok(())
}

pub fn set_entry_status(conn: &Connection, id: i64, status: Status) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE timesheets SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    if changed == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

pub fn insert_comment(
    conn: &Connection,
    timesheet_id: i64,
    user_id: i64,
    commenter_role: &str,
    comment: &str,
    created_at: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO comments (timesheet_id, user_id, commenter_role, comment, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![timesheet_id, user_id, commenter_role, comment, created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_comments_for_entry(conn: &Connection, timesheet_id: i64) -> AppResult<Vec<Comment>> {
    let mut stmt = conn.prepare(
        "SELECT c.id, c.timesheet_id, c.user_id, c.commenter_role, c.comment,
                c.created_at, u.username
         FROM comments c
         LEFT JOIN users u ON u.id = c.user_id
         WHERE c.timesheet_id = ?1
         ORDER BY c.created_at ASC",
    )?;

    let rows = stmt.query_map([timesheet_id], |row| {
        Ok(Comment {
            id: row.get(0)?,
            timesheet_id: row.get(1)?,
            user_id: row.get(2)?,
            commenter_role: row.get(3)?,
            comment: row.get(4)?,
            created_at: row.get(5)?,
            username: row.get(6)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Counts (dashboard KPIs)
// ---------------------------------------------------------------------------

pub fn count_users(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?)
}

pub fn count_companies(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM companies", [], |row| row.get(0))?)
}

