use crate::auth::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::entry::EntryRecord;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET};
use crate::utils::date::{last_day_of_month, month_label, parse_date, today};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month, user, day } = cmd {
        let current = session::current()?;
        let pool = DbPool::new(&cfg.database)?;

        let mut entries = if current.role.is_admin() {
            queries::load_all_entries(&pool.conn)?
        } else {
            queries::load_entries_by_user(&pool.conn, current.user_id)?
        };

        if let Some(name) = user {
            if !current.role.is_admin() {
                return Err(AppError::PermissionDenied(
                    "--user is admin only".to_string(),
                ));
            }
            entries.retain(|e| e.username.as_deref() == Some(name.as_str()));
        }

        // Day view: list the entries of one date instead of the grid.
        if let Some(d) = day {
            let date = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
            print_day(&entries, date);
            return Ok(());
        }

        let (year, mon) = match month {
            Some(m) => parse_month(m)?,
            None => {
                let t = today();
                (t.year(), t.month())
            }
        };

        print_month_grid(&entries, year, mon);
    }
    Ok(())
}

/// Parse a `YYYY-MM` month selector.
fn parse_month(m: &str) -> AppResult<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", m), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(m.to_string()))?;
    Ok((first.year(), first.month()))
}

fn print_day(entries: &[EntryRecord], date: NaiveDate) {
    let key = date.format("%Y-%m-%d").to_string();
    let day_entries: Vec<&EntryRecord> = entries.iter().filter(|e| e.date == key).collect();

    println!("\n{}{}{}", CYAN, key, RESET);

    if day_entries.is_empty() {
        println!("{}  (no entries){}", GREY, RESET);
        return;
    }

    for e in day_entries {
        println!(
            "  #{:<4} {} - {}  {:<20} {}",
            e.id,
            e.start_time,
            e.end_time,
            e.username.as_deref().unwrap_or("-"),
            e.task
        );
    }
}

/// Month grid, one cell per day, entry count next to days with activity.
fn print_month_grid(entries: &[EntryRecord], year: i32, month: u32) {
    let prefix = format!("{:04}-{:02}-", year, month);

    let mut per_day: HashMap<u32, usize> = HashMap::new();
    for e in entries {
        if let Some(rest) = e.date.strip_prefix(&prefix)
            && let Ok(d) = rest.parse::<u32>()
        {
            *per_day.entry(d).or_insert(0) += 1;
        }
    }

    println!("\n{}{}{}", CYAN, month_label(year, month), RESET);
    println!("{} Mo     Tu     We     Th     Fr     Sa     Su{}", GREY, RESET);

    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return,
    };

    // Monday = 0
    let mut weekday = first.weekday().num_days_from_monday();
    let mut line = "       ".repeat(weekday as usize);

    for day in 1..=last_day_of_month(year, month) {
        let cell = match per_day.get(&day) {
            Some(n) => format!("{:>3}{}({}) {}", day, GREEN, n, RESET),
            None => format!("{:>3}    ", day),
        };
        line.push_str(&cell);

        weekday += 1;
        if weekday == 7 {
            println!("{}", line);
            line = String::new();
            weekday = 0;
        }
    }

    if !line.is_empty() {
        println!("{}", line);
    }
    println!();
}
