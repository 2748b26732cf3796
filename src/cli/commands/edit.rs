use crate::auth::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::billing;
use crate::db::pool::DbPool;
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

/// Edit a timesheet entry.
///
/// Operators may edit their own entries, admins any entry. The billable
/// amount is always recomputed from the resulting time range and rate; an
/// invalid range rejects the whole edit and leaves the row untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date: date_opt,
        task,
        start,
        end,
        break_minutes,
        rate,
    } = cmd
    {
        let current = session::current()?;
        let pool = DbPool::new(&cfg.database)?;

        let mut entry = queries::get_entry(&pool.conn, *id)?;

        if !current.role.is_admin() && entry.user_id != current.user_id {
            return Err(AppError::PermissionDenied(format!(
                "entry {} belongs to another user",
                id
            )));
        }

        if let Some(d) = date_opt {
            let parsed =
                date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
            entry.date = parsed.format("%Y-%m-%d").to_string();
        }
        if let Some(t) = task {
            entry.task = t.clone();
        }
        if let Some(s) = start {
            entry.start_time = s.clone();
        }
        if let Some(e) = end {
            entry.end_time = e.clone();
        }
        if let Some(b) = break_minutes {
            entry.break_minutes = i64::from(*b);
        }
        if let Some(r) = rate {
            if *r < 0.0 {
                return Err(AppError::Other(format!(
                    "Hourly rate cannot be negative: {}",
                    r
                )));
            }
            entry.rate_per_hour = *r;
        }

        // Recompute with the strict write-path policy
        let amount = billing::compute_amount(
            &entry.start_time,
            &entry.end_time,
            entry.break_minutes,
            entry.rate_per_hour,
        )?;
        entry.billable_amount = Some(amount);

        queries::update_entry(&pool.conn, &entry)?;

        let _ = log::ttlog(
            &pool.conn,
            "entry_edit",
            &id.to_string(),
            &format!("Entry updated, amount {:.2}", amount),
        );

        success(format!("Updated entry {} (amount {:.2}).", id, amount));
    }

    Ok(())
}
