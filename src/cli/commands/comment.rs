use crate::auth::session;
use crate::cli::parser::{Commands, CommentAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Comment { action } = cmd else {
        return Ok(());
    };

    let current = session::current()?;
    let pool = DbPool::new(&cfg.database)?;

    match action {
        CommentAction::Add { entry, text } => {
            // Ensure the entry exists
            queries::get_entry(&pool.conn, *entry)?;

            let now = Local::now().to_rfc3339();
            queries::insert_comment(
                &pool.conn,
                *entry,
                current.user_id,
                current.role.to_db_str(),
                text,
                &now,
            )?;

            success(format!("Comment added to entry {}.", entry));
        }

        CommentAction::List { entry } => {
            let comments = queries::load_comments_for_entry(&pool.conn, *entry)?;

            if comments.is_empty() {
                println!("No comments for entry {}.", entry);
                return Ok(());
            }

            for c in &comments {
                println!(
                    "[{}] {} ({}): {}",
                    c.created_at,
                    c.username.as_deref().unwrap_or("-"),
                    c.commenter_role,
                    c.comment
                );
            }
        }
    }

    Ok(())
}
