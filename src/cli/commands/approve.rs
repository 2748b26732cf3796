use crate::auth::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{log, queries};
use crate::errors::AppResult;
use crate::models::status::Status;
use crate::ui::messages::success;
use chrono::Local;

/// Approve or reject an entry (admin only). A non-empty note is stored as
/// an admin comment on the entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Approve { id, reject, note } = cmd {
        let admin = session::require_admin()?;
        let pool = DbPool::new(&cfg.database)?;

        // Ensure the entry exists before touching status or comments
        queries::get_entry(&pool.conn, *id)?;

        let status = if *reject {
            Status::Rejected
        } else {
            Status::Approved
        };
        queries::set_entry_status(&pool.conn, *id, status)?;

        if let Some(text) = note
            && !text.trim().is_empty()
        {
            let now = Local::now().to_rfc3339();
            queries::insert_comment(
                &pool.conn,
                *id,
                admin.user_id,
                "admin",
                text.trim(),
                &now,
            )?;
        }

        let _ = log::ttlog(
            &pool.conn,
            "entry_status",
            &id.to_string(),
            &format!("Status set to {}", status.to_db_str()),
        );

        success(format!("Entry {} {}.", id, status.to_db_str()));
    }
    Ok(())
}
