use chrono::NaiveDate;
use tallysheet::core::dashboard::{
    billable_split, clamped_worked_minutes, hours_per_user, monthly_trend,
};
use tallysheet::models::entry::EntryRecord;
use tallysheet::models::status::Status;

/// Build a row with the fields the aggregator cares about.
fn row(username: Option<&str>, date: &str, start: &str, end: &str, brk: i64) -> EntryRecord {
    EntryRecord {
        id: 0,
        user_id: 1,
        username: username.map(|s| s.to_string()),
        date: date.to_string(),
        task: "work".to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        break_minutes: brk,
        billable: false,
        rate_per_hour: 0.0,
        billable_amount: None,
        company_id: None,
        company_name: None,
        status: Status::Pending,
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_clamped_minutes_normal_row() {
    let r = row(Some("a"), "2025-06-01", "09:00", "17:00", 30);
    assert_eq!(clamped_worked_minutes(&r), 450);
}

#[test]
fn test_clamped_minutes_unparseable_time_counts_zero() {
    let r = row(Some("a"), "2025-06-01", "bad", "17:00", 0);
    assert_eq!(clamped_worked_minutes(&r), 0);

    let r = row(Some("a"), "2025-06-01", "09:00", "", 0);
    assert_eq!(clamped_worked_minutes(&r), 0);
}

#[test]
fn test_clamped_minutes_inverted_range_counts_zero() {
    // Rejected by the billing calculator on write, but the aggregator
    // clamps it to zero instead of erroring.
    let r = row(Some("a"), "2025-06-01", "10:00", "09:00", 0);
    assert_eq!(clamped_worked_minutes(&r), 0);
}

#[test]
fn test_clamped_minutes_break_exceeding_range_counts_zero() {
    let r = row(Some("a"), "2025-06-01", "09:00", "10:00", 120);
    assert_eq!(clamped_worked_minutes(&r), 0);
}

#[test]
fn test_hours_per_user_accumulates() {
    // 120 min + 60 min for the same user
    let rows = vec![
        row(Some("a"), "2025-06-01", "09:00", "11:00", 0),
        row(Some("a"), "2025-06-02", "09:00", "10:00", 0),
    ];

    assert_eq!(hours_per_user(&rows), vec![("a".to_string(), 3.0)]);
}

#[test]
fn test_hours_per_user_first_encounter_order() {
    let rows = vec![
        row(Some("zoe"), "2025-06-01", "09:00", "10:00", 0),
        row(Some("amy"), "2025-06-01", "09:00", "11:00", 0),
        row(Some("zoe"), "2025-06-02", "09:00", "10:00", 0),
    ];

    let per_user = hours_per_user(&rows);
    assert_eq!(
        per_user,
        vec![("zoe".to_string(), 2.0), ("amy".to_string(), 2.0)]
    );
}

#[test]
fn test_hours_per_user_missing_username_groups_as_unknown() {
    let rows = vec![
        row(None, "2025-06-01", "09:00", "10:00", 0),
        row(None, "2025-06-02", "09:00", "10:00", 0),
    ];

    assert_eq!(
        hours_per_user(&rows),
        vec![("(unknown)".to_string(), 2.0)]
    );
}

#[test]
fn test_bad_row_does_not_poison_other_rows() {
    let rows = vec![
        row(Some("a"), "2025-06-01", "bad", "17:00", 0),
        row(Some("a"), "2025-06-02", "09:00", "10:00", 0),
    ];

    assert_eq!(hours_per_user(&rows), vec![("a".to_string(), 1.0)]);
}

#[test]
fn test_billable_split_counts_rows() {
    let mut rows = vec![
        row(Some("a"), "2025-06-01", "09:00", "10:00", 0),
        row(Some("a"), "2025-06-02", "09:00", "10:00", 0),
        row(Some("b"), "2025-06-03", "09:00", "10:00", 0),
    ];
    rows[0].billable = true;

    let split = billable_split(&rows);
    assert_eq!(split.billable, 1);
    assert_eq!(split.non_billable, 2);
}

#[test]
fn test_trend_always_six_points() {
    let today = day(2025, 6, 15);

    let trend = monthly_trend(&[], today);
    assert_eq!(trend.len(), 6);
    assert!(trend.iter().all(|p| p.total_hours == 0.0));

    // Oldest to newest: Jan..Jun 2025
    assert_eq!(trend[0].month_label, "Jan 2025");
    assert_eq!(trend[5].month_label, "Jun 2025");
}

#[test]
fn test_trend_crosses_year_boundary() {
    let today = day(2025, 2, 1);

    let trend = monthly_trend(&[], today);
    assert_eq!(trend.len(), 6);
    assert_eq!(trend[0].month_label, "Sep 2024");
    assert_eq!(trend[5].month_label, "Feb 2025");
}

#[test]
fn test_trend_buckets_by_month() {
    let today = day(2025, 6, 15);
    let rows = vec![
        row(Some("a"), "2025-06-01", "09:00", "11:00", 0),
        row(Some("a"), "2025-06-20", "09:00", "10:00", 0),
        row(Some("a"), "2025-05-10", "09:00", "10:00", 0),
        // outside the window, ignored
        row(Some("a"), "2024-06-10", "09:00", "10:00", 0),
    ];

    let trend = monthly_trend(&rows, today);
    assert_eq!(trend.len(), 6);
    assert_eq!(trend[4].month_label, "May 2025");
    assert_eq!(trend[4].total_hours, 1.0);
    assert_eq!(trend[5].month_label, "Jun 2025");
    assert_eq!(trend[5].total_hours, 3.0);
}

#[test]
fn test_trend_skips_unparseable_dates() {
    let today = day(2025, 6, 15);
    let rows = vec![
        row(Some("a"), "not-a-date", "09:00", "17:00", 0),
        row(Some("a"), "2025-06-01", "09:00", "10:00", 0),
    ];

    let trend = monthly_trend(&rows, today);
    assert_eq!(trend[5].total_hours, 1.0);
}

#[test]
fn test_aggregation_is_idempotent() {
    let today = day(2025, 6, 15);
    let rows = vec![
        row(Some("a"), "2025-06-01", "09:00", "11:00", 0),
        row(Some("b"), "2025-05-10", "bad", "10:00", 0),
        row(None, "2025-04-01", "09:00", "10:00", 15),
    ];

    assert_eq!(hours_per_user(&rows), hours_per_user(&rows));
    assert_eq!(monthly_trend(&rows, today), monthly_trend(&rows, today));
    assert_eq!(billable_split(&rows), billable_split(&rows));
}
