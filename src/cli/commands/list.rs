use crate::auth::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::entry::EntryRecord;
use crate::models::status::Status;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        user,
        status,
        mine,
    } = cmd
    {
        let current = session::current()?;
        let pool = DbPool::new(&cfg.database)?;

        // Operators only ever see their own entries; admin sees all unless
        // --mine or --user narrows the view.
        let mut entries = if current.role.is_admin() && !mine {
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

        if let Some(status_str) = status {
            let wanted = Status::from_db_str(status_str)
                .ok_or_else(|| AppError::InvalidStatus(status_str.clone()))?;
            entries.retain(|e| e.status == wanted);
        }

        if let Some(p) = period {
            let (from, to) =
                date::period_bounds(p).map_err(AppError::InvalidDate)?;
            let from = from.format("%Y-%m-%d").to_string();
            let to = to.format("%Y-%m-%d").to_string();
            entries.retain(|e| e.date >= from && e.date <= to);
        }

        if entries.is_empty() {
            println!("No entries found.");
            return Ok(());
        }

        print_entries(&entries, &cfg.currency_symbol);
    }
    Ok(())
}

fn print_entries(entries: &[EntryRecord], currency: &str) {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("DATE", 10),
        Column::new("USER", 14),
        Column::new("TASK", 24),
        Column::new("TIME", 13),
        Column::new("BREAK", 5),
        Column::new("BILL", 4),
        Column::new("AMOUNT", 12),
        Column::new("COMPANY", 18),
        Column::new("STATUS", 16),
    ]);

    for e in entries {
        let status = e.status.to_db_str();
        table.add_row(vec![
            e.id.to_string(),
            e.date.clone(),
            e.username.clone().unwrap_or_else(|| "-".to_string()),
            e.task.clone(),
            format!("{} - {}", e.start_time, e.end_time),
            format!("{}m", e.break_minutes),
            if e.billable { "yes" } else { "no" }.to_string(),
            format!("{}{:.2}", currency, e.billable_amount.unwrap_or(0.0)),
            e.company_name.clone().unwrap_or_else(|| "-".to_string()),
            format!("{}{}{}", color_for_status(status), status, RESET),
        ]);
    }

    print!("{}", table.render());
}
