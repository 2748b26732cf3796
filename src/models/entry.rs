use super::status::Status;
use serde::Serialize;

/// One timesheet row as returned by the bulk read (timesheets joined with
/// users and companies).
///
/// Time fields stay as raw TEXT on purpose: the dashboard aggregator must
/// tolerate malformed rows (a bad `start_time` contributes zero worked
/// minutes, it never aborts the batch), so parsing happens inside the
/// aggregation helpers, never in the row mapper.
#[derive(Debug, Clone, Serialize)]
pub struct EntryRecord {
    pub id: i64,
    pub user_id: i64,
    pub username: Option<String>, // LEFT JOIN users; None when the user was deleted
    pub date: String,             // ⇔ timesheets.date (TEXT "YYYY-MM-DD")
    pub task: String,
    pub start_time: String, // ⇔ timesheets.start_time (TEXT "HH:MM")
    pub end_time: String,   // ⇔ timesheets.end_time (TEXT "HH:MM")
    pub break_minutes: i64,
    pub billable: bool, // ⇔ timesheets.billable (0|1)
    pub rate_per_hour: f64,
    pub billable_amount: Option<f64>,
    pub company_id: Option<i64>,
    pub company_name: Option<String>,
    pub status: Status,
}

/// Input for inserting a new timesheet row. The billable amount is computed
/// by the caller (core::billing) and persisted alongside the entry.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub user_id: i64,
    pub date: String,
    pub task: String,
    pub start_time: String,
    pub end_time: String,
    pub break_minutes: i64,
    pub billable: bool,
    pub rate_per_hour: f64,
    pub billable_amount: f64,
    pub company_id: Option<i64>,
    pub status: Status,
}
