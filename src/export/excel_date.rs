use chrono::{NaiveDate, NaiveTime, Timelike};

/// Interpret a string as a date (`YYYY-MM-DD`) or a clock time (`HH:MM`),
/// returning the Excel serial number plus its number format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let serial = naive_date_to_excel_serial(d);
        return Some(("yyyy-mm-dd", serial));
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm", seconds / 86400.0));
    }

    None
}

fn naive_date_to_excel_serial(d: NaiveDate) -> f64 {
    // Excel's day zero is 1899-12-30
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    (d - excel_epoch).num_days() as f64
}
