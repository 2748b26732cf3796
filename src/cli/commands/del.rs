use crate::auth::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Delete a timesheet entry and its comments.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let current = session::current()?;
        let pool = DbPool::new(&cfg.database)?;

        let entry = queries::get_entry(&pool.conn, *id)?;

        if !current.role.is_admin() && entry.user_id != current.user_id {
            return Err(AppError::PermissionDenied(format!(
                "entry {} belongs to another user",
                id
            )));
        }

        queries::delete_entry(&pool.conn, *id)?;

        let _ = log::ttlog(
            &pool.conn,
            "entry_delete",
            &id.to_string(),
            &format!("Entry for {} deleted", entry.date),
        );

        success(format!("Deleted entry {}.", id));
    }
    Ok(())
}
