//! Scalar KPIs shown at the top of the dashboard.

use crate::core::billing::round2;
use crate::core::dashboard::{clamped_worked_minutes, hours_per_user};
use crate::models::entry::EntryRecord;
use crate::utils::date::month_start;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardTotals {
    pub total_users: i64,
    pub total_companies: i64,
    pub total_entries: i64,
    pub total_hours_this_month: f64,
    /// Lifetime sum of the stored billable_amount column, not period-scoped.
    pub billable_amount: f64,
    pub top_user: Option<String>,
}

impl DashboardTotals {
    pub fn compute(
        total_users: i64,
        total_companies: i64,
        rows: &[EntryRecord],
        today: NaiveDate,
    ) -> Self {
        Self {
            total_users,
            total_companies,
            total_entries: rows.len() as i64,
            total_hours_this_month: hours_this_month(rows, today),
            billable_amount: lifetime_billable_amount(rows),
            top_user: top_user(rows),
        }
    }
}

/// Worked hours of rows dated on or after the first of `today`'s month.
///
/// Rows are selected by comparing the raw ISO date string against the
/// month-start string; the six-month trend matches by year+month instead,
/// and the two selection rules are kept distinct.
pub fn hours_this_month(rows: &[EntryRecord], today: NaiveDate) -> f64 {
    let start = month_start(today).format("%Y-%m-%d").to_string();

    let minutes: i64 = rows
        .iter()
        .filter(|r| r.date.as_str() >= start.as_str())
        .map(clamped_worked_minutes)
        .sum();

    round2(minutes as f64 / 60.0)
}

/// Sum of `billable_amount` across all rows ever recorded. Absent values
/// count as zero.
pub fn lifetime_billable_amount(rows: &[EntryRecord]) -> f64 {
    round2(rows.iter().filter_map(|r| r.billable_amount).sum())
}

/// The user with the most accumulated worked hours; ties resolve to the
/// user encountered first.
pub fn top_user(rows: &[EntryRecord]) -> Option<String> {
    let per_user = hours_per_user(rows);

    per_user
        .into_iter()
        .fold(None::<(String, f64)>, |best, (name, hours)| match best {
            Some((_, best_hours)) if best_hours >= hours => best,
            _ => Some((name, hours)),
        })
        .map(|(name, _)| name)
}
