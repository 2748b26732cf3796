use crate::auth;
use crate::auth::session::{self, Session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Verify credentials and persist the session.
/// Deactivated users are refused unless they are admins.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let (user, stored_hash) = queries::find_user_for_login(&pool.conn, username)?
            .ok_or_else(|| AppError::UserNotFound(username.clone()))?;

        if !user.active && !user.role.is_admin() {
            return Err(AppError::UserDeactivated);
        }

        if !auth::verify_password(password, &stored_hash) {
            return Err(AppError::IncorrectPassword);
        }

        session::save(&Session {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
        })?;

        let _ = log::ttlog(&pool.conn, "login", &user.username, "User logged in");

        success(format!(
            "Logged in as {} ({}).",
            user.username,
            user.role.to_db_str()
        ));
    }
    Ok(())
}

pub fn handle_logout() -> AppResult<()> {
    session::clear()?;
    success("Logged out.");
    Ok(())
}

/// Change the logged-in user's own password after verifying the old one.
pub fn handle_passwd(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Passwd { old, new } = cmd {
        let current = session::current()?;
        let pool = DbPool::new(&cfg.database)?;

        let stored_hash = queries::get_user_password(&pool.conn, current.user_id)?;
        if !auth::verify_password(old, &stored_hash) {
            return Err(AppError::IncorrectPassword);
        }

        let new_hash = auth::hash_password(new);
        queries::set_user_password(&pool.conn, current.user_id, &new_hash)?;

        let _ = log::ttlog(
            &pool.conn,
            "passwd",
            &current.username,
            "Password changed",
        );

        success("Password changed.");
    }
    Ok(())
}
