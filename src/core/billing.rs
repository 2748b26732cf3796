//! Single-entry billing calculator.
//!
//! Given a time range, break duration, and hourly rate, produce the billable
//! amount or reject the input. Used by `add` and `edit` when a row is
//! written; the dashboard aggregator applies a clamp-to-zero rule instead
//! (see `core::dashboard`) and the two policies are intentionally separate.

use crate::errors::{AppError, AppResult};
use crate::utils::time::hhmm_to_minutes;

/// Round to 2 decimals, half away from zero.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Net worked minutes of a valid range, or an error when the range is
/// inverted, zero-length, or fully consumed by the break.
pub fn worked_minutes(start: &str, end: &str, break_minutes: i64) -> AppResult<i64> {
    let start_mins =
        hhmm_to_minutes(start).ok_or_else(|| AppError::InvalidTime(start.to_string()))?;
    let end_mins = hhmm_to_minutes(end).ok_or_else(|| AppError::InvalidTime(end.to_string()))?;

    if end_mins <= start_mins {
        return Err(AppError::InvalidTimeRange(format!(
            "end {} must be later than start {}",
            end, start
        )));
    }

    let worked = end_mins - start_mins - break_minutes;
    if worked <= 0 {
        return Err(AppError::InvalidTimeRange(format!(
            "no worked time left in {} - {} after a {} minute break",
            start, end, break_minutes
        )));
    }

    Ok(worked)
}

/// Billable amount for one entry: `round2(worked_hours * rate_per_hour)`.
///
/// Pure function; the caller persists the result alongside the entry.
/// Computed for every entry regardless of the billable flag, as the stored
/// `billable_amount` column always carries a value.
pub fn compute_amount(
    start: &str,
    end: &str,
    break_minutes: i64,
    rate_per_hour: f64,
) -> AppResult<f64> {
    let worked = worked_minutes(start, end, break_minutes)?;
    Ok(round2((worked as f64 / 60.0) * rate_per_hour))
}
