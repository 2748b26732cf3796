use chrono::NaiveDate;
use tallysheet::core::summary::{
    DashboardTotals, hours_this_month, lifetime_billable_amount, top_user,
};
use tallysheet::models::entry::EntryRecord;
use tallysheet::models::status::Status;

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
fn test_hours_this_month_selects_by_month_start() {
    let today = day(2025, 6, 15);
    let rows = vec![
        row(Some("a"), "2025-06-01", "09:00", "11:00", 0),
        row(Some("a"), "2025-06-30", "09:00", "10:00", 0),
        // previous month, excluded
        row(Some("a"), "2025-05-31", "09:00", "17:00", 0),
    ];

    assert_eq!(hours_this_month(&rows, today), 3.0);
}

#[test]
fn test_hours_this_month_includes_dates_after_today() {
    // Selection is "on or after the first of the month", so later dates in
    // the same month (and lexicographically greater strings) still count.
    let today = day(2025, 6, 15);
    let rows = vec![row(Some("a"), "2025-06-20", "09:00", "10:00", 0)];

    assert_eq!(hours_this_month(&rows, today), 1.0);
}

#[test]
fn test_hours_this_month_empty() {
    assert_eq!(hours_this_month(&[], day(2025, 6, 15)), 0.0);
}

#[test]
fn test_lifetime_billable_amount_sums_and_skips_none() {
    let mut rows = vec![
        row(Some("a"), "2025-06-01", "09:00", "10:00", 0),
        row(Some("a"), "2025-06-02", "09:00", "10:00", 0),
        row(Some("a"), "2025-06-03", "09:00", "10:00", 0),
    ];
    rows[0].billable_amount = Some(100.5);
    rows[1].billable_amount = Some(49.5);
    // rows[2] stays None and counts as zero

    assert_eq!(lifetime_billable_amount(&rows), 150.0);
}

#[test]
fn test_top_user_most_hours_wins() {
    let rows = vec![
        row(Some("amy"), "2025-06-01", "09:00", "10:00", 0),
        row(Some("bob"), "2025-06-01", "09:00", "12:00", 0),
    ];

    assert_eq!(top_user(&rows), Some("bob".to_string()));
}

#[test]
fn test_top_user_tie_resolves_to_first_encountered() {
    let rows = vec![
        row(Some("zoe"), "2025-06-01", "09:00", "10:00", 0),
        row(Some("amy"), "2025-06-01", "09:00", "10:00", 0),
    ];

    assert_eq!(top_user(&rows), Some("zoe".to_string()));
}

#[test]
fn test_top_user_empty_collection() {
    assert_eq!(top_user(&[]), None);
}

#[test]
fn test_totals_on_empty_collection() {
    let totals = DashboardTotals::compute(0, 0, &[], day(2025, 6, 15));

    assert_eq!(totals.total_users, 0);
    assert_eq!(totals.total_companies, 0);
    assert_eq!(totals.total_entries, 0);
    assert_eq!(totals.total_hours_this_month, 0.0);
    assert_eq!(totals.billable_amount, 0.0);
    assert_eq!(totals.top_user, None);
}

#[test]
fn test_totals_counts_come_from_caller() {
    let rows = vec![row(Some("a"), "2025-06-01", "09:00", "10:00", 0)];
    let totals = DashboardTotals::compute(3, 2, &rows, day(2025, 6, 15));

    assert_eq!(totals.total_users, 3);
    assert_eq!(totals.total_companies, 2);
    assert_eq!(totals.total_entries, 1);
    assert_eq!(totals.top_user, Some("a".to_string()));
}
