use crate::models::entry::EntryRecord;
use serde::Serialize;

/// Flat row shape shared by all export formats.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub username: String,
    pub task: String,
    pub start_time: String,
    pub end_time: String,
    pub break_minutes: i64,
    pub billable: bool,
    pub rate_per_hour: f64,
    pub billable_amount: f64,
    pub company: String,
    pub status: String,
}

impl From<&EntryRecord> for EntryExport {
    fn from(e: &EntryRecord) -> Self {
        Self {
            id: e.id,
            date: e.date.clone(),
            username: e.username.clone().unwrap_or_default(),
            task: e.task.clone(),
            start_time: e.start_time.clone(),
            end_time: e.end_time.clone(),
            break_minutes: e.break_minutes,
            billable: e.billable,
            rate_per_hour: e.rate_per_hour,
            billable_amount: e.billable_amount.unwrap_or(0.0),
            company: e.company_name.clone().unwrap_or_default(),
            status: e.status.to_db_str().to_string(),
        }
    }
}

/// Headers for CSV / JSON / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "username",
        "task",
        "start_time",
        "end_time",
        "break_minutes",
        "billable",
        "rate_per_hour",
        "billable_amount",
        "company",
        "status",
    ]
}

/// Convert one entry into a row of strings (for PDF).
pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.date.clone(),
        e.username.clone(),
        e.task.clone(),
        e.start_time.clone(),
        e.end_time.clone(),
        e.break_minutes.to_string(),
        if e.billable { "yes" } else { "no" }.to_string(),
        format!("{:.2}", e.rate_per_hour),
        format!("{:.2}", e.billable_amount),
        e.company.clone(),
        e.status.clone(),
    ]
}

pub(crate) fn entries_to_table(entries: &[EntryExport]) -> Vec<Vec<String>> {
    entries.iter().map(entry_to_row).collect()
}
