use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// First day of the month `date` falls in.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

/// Shift `(year, month)` back by `months` calendar months.
pub fn months_back(year: i32, month: u32, months: u32) -> (i32, u32) {
    let total = year * 12 + (month as i32 - 1) - months as i32;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

pub fn month_label(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0);
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}

/// Resolve a `--period` expression into inclusive date bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - start:end (any of the above on both sides)
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (s, _) = single_period_bounds(start_raw.trim())?;
        let (_, e) = single_period_bounds(end_raw.trim())?;
        if e < s {
            return Err(format!("Invalid period: end before start in '{}'", p));
        }
        return Ok((s, e));
    }
    single_period_bounds(p)
}

fn single_period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if p.len() == 7
        && let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d")
    {
        let last = NaiveDate::from_ymd_opt(
            first.year(),
            first.month(),
            last_day_of_month(first.year(), first.month()),
        )
        .unwrap();
        return Ok((first, last));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        let first = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| format!("Invalid period: {}", p))?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}
