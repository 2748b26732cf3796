use crate::auth::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::billing;
use crate::db::pool::DbPool;
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::models::entry::NewEntry;
use crate::models::status::Status;
use crate::ui::messages::success;
use crate::utils::date;

/// Add a timesheet entry for the logged-in user.
///
/// The billable amount is produced by the billing calculator, which rejects
/// inverted or empty time ranges; nothing is written on rejection.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        task,
        start,
        end,
        break_minutes,
        billable,
        rate,
        company,
    } = cmd
    {
        let current = session::current()?;

        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        //
        // 2. Resolve break and rate (config defaults when omitted)
        //
        let break_mins = break_minutes.map(i64::from).unwrap_or(cfg.default_break_minutes);
        let rate_val = rate.unwrap_or(cfg.default_rate_per_hour);
        if rate_val < 0.0 {
            return Err(AppError::Other(format!(
                "Hourly rate cannot be negative: {}",
                rate_val
            )));
        }

        //
        // 3. Compute the billable amount (rejects invalid ranges)
        //
        let amount = billing::compute_amount(start, end, break_mins, rate_val)?;

        //
        // 4. Open DB and validate the company reference
        //
        let pool = DbPool::new(&cfg.database)?;

        if let Some(company_id) = company {
            queries::get_company(&pool.conn, *company_id)?;
        }

        //
        // 5. Persist
        //
        let entry = NewEntry {
            user_id: current.user_id,
            date: d.format("%Y-%m-%d").to_string(),
            task: task.clone(),
            start_time: start.clone(),
            end_time: end.clone(),
            break_minutes: break_mins,
            billable: *billable,
            rate_per_hour: rate_val,
            billable_amount: amount,
            company_id: *company,
            status: Status::Pending,
        };

        let id = queries::insert_entry(&pool.conn, &entry)?;

        let _ = log::ttlog(
            &pool.conn,
            "entry_add",
            &id.to_string(),
            &format!("Entry added for {}", entry.date),
        );

        success(format!(
            "Added entry {} on {} ({} → {}, amount {:.2}).",
            id, entry.date, start, end, amount
        ));
    }

    Ok(())
}
