//! Dashboard aggregation over the full timesheet collection.
//!
//! Best-effort and partial-failure tolerant: a row with an unparseable time
//! field contributes zero worked minutes, a row with an unparseable date is
//! skipped from the trend, and no row-level defect ever aborts the batch.
//! Everything here is pure; `today` is always passed in by the caller.

use crate::core::billing::round2;
use crate::models::entry::EntryRecord;
use crate::utils::date::{month_label, months_back};
use crate::utils::time::hhmm_to_minutes;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Row counts of billable vs non-billable entries (no time weighting).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BillableSplit {
    pub billable: usize,
    pub non_billable: usize,
}

/// One month of the rolling trend.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub month_label: String,
    pub total_hours: f64,
}

/// Worked minutes with the aggregation policy: unparseable times count as
/// zero and a negative raw duration is clamped to zero, never rejected.
/// The write path (`core::billing`) rejects such rows instead.
pub fn clamped_worked_minutes(row: &EntryRecord) -> i64 {
    let (Some(start), Some(end)) = (
        hhmm_to_minutes(&row.start_time),
        hhmm_to_minutes(&row.end_time),
    ) else {
        return 0;
    };

    (end - start - row.break_minutes).max(0)
}

/// Total worked hours per username, in first-encounter order, rounded to
/// 2 decimals. Rows without a username (deleted user) group under "(unknown)".
pub fn hours_per_user(rows: &[EntryRecord]) -> Vec<(String, f64)> {
    let mut order: Vec<String> = Vec::new();
    let mut minutes: HashMap<String, i64> = HashMap::new();

    for row in rows {
        let name = row
            .username
            .clone()
            .unwrap_or_else(|| "(unknown)".to_string());

        if !minutes.contains_key(&name) {
            order.push(name.clone());
        }
        *minutes.entry(name).or_insert(0) += clamped_worked_minutes(row);
    }

    order
        .into_iter()
        .map(|name| {
            let total = minutes[&name];
            (name, round2(total as f64 / 60.0))
        })
        .collect()
}

/// Count rows with the billable flag set versus all others.
pub fn billable_split(rows: &[EntryRecord]) -> BillableSplit {
    let billable = rows.iter().filter(|r| r.billable).count();
    BillableSplit {
        billable,
        non_billable: rows.len() - billable,
    }
}

/// Worked hours for each of the 6 calendar months ending at `today`'s month
/// (inclusive), oldest first. Rows are matched by year+month; rows with an
/// unparseable date are skipped. Always exactly 6 points.
pub fn monthly_trend(rows: &[EntryRecord], today: NaiveDate) -> Vec<TrendPoint> {
    let mut month_minutes: HashMap<(i32, u32), i64> = HashMap::new();

    for row in rows {
        let Ok(date) = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d") else {
            continue;
        };
        *month_minutes.entry((date.year(), date.month())).or_insert(0) +=
            clamped_worked_minutes(row);
    }

    (0..6)
        .rev()
        .map(|back| {
            let (year, month) = months_back(today.year(), today.month(), back);
            let mins = month_minutes.get(&(year, month)).copied().unwrap_or(0);
            TrendPoint {
                month_label: month_label(year, month),
                total_hours: round2(mins as f64 / 60.0),
            }
        })
        .collect()
}
