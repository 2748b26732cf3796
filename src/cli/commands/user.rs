use crate::auth;
use crate::auth::session;
use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::table::{Column, Table};

/// Admin user management: create, list, edit, reset-password, delete.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::User { action } = cmd else {
        return Ok(());
    };

    let admin = session::require_admin()?;
    let pool = DbPool::new(&cfg.database)?;

    match action {
        UserAction::Create {
            username,
            password,
            role,
            company,
        } => {
            // Referenced company must exist before the insert
            if let Some(company_id) = company {
                queries::get_company(&pool.conn, *company_id)?;
            }

            let hash = auth::hash_password(password);
            queries::insert_user(&pool.conn, username, &hash, *role, *company)?;

            let _ = log::ttlog(&pool.conn, "user_create", username, "User created");
            success(format!("Created user '{}'.", username));
        }

        UserAction::List => {
            let users = queries::load_users(&pool.conn)?;

            let mut table = Table::new(vec![
                Column::new("ID", 5),
                Column::new("USERNAME", 20),
                Column::new("ROLE", 10),
                Column::new("COMPANY", 24),
                Column::new("ACTIVE", 6),
            ]);

            for u in &users {
                table.add_row(vec![
                    u.id.to_string(),
                    u.username.clone(),
                    u.role.to_db_str().to_string(),
                    u.company_name.clone().unwrap_or_else(|| "-".to_string()),
                    if u.active { "yes" } else { "no" }.to_string(),
                ]);
            }

            print!("{}", table.render());
        }

        UserAction::Edit {
            id,
            username,
            role,
            company,
            activate,
            deactivate,
        } => {
            let existing = queries::get_user(&pool.conn, *id)?;

            let new_username = username.clone().unwrap_or(existing.username);
            let new_role = role.unwrap_or(existing.role);
            let new_company = company.or(existing.company_id);
            let new_active = if *activate {
                true
            } else if *deactivate {
                false
            } else {
                existing.active
            };

            if *deactivate && *id == admin.user_id {
                return Err(AppError::PermissionDenied(
                    "cannot deactivate your own account".to_string(),
                ));
            }

            queries::update_user(&pool.conn, *id, &new_username, new_role, new_company, new_active)?;

            let _ = log::ttlog(&pool.conn, "user_edit", &new_username, "User updated");
            success(format!("Updated user {}.", id));
        }

        UserAction::ResetPassword { id, password } => {
            let target = queries::get_user(&pool.conn, *id)?;

            if *id == admin.user_id {
                warning("Resetting your own password; use `passwd` to keep the old-password check.");
            }

            let hash = auth::hash_password(password);
            queries::set_user_password(&pool.conn, *id, &hash)?;

            let _ = log::ttlog(&pool.conn, "user_reset_pwd", &target.username, "Password reset");
            success(format!("Password reset for '{}'.", target.username));
        }

        UserAction::Delete { id } => {
            if *id == admin.user_id {
                return Err(AppError::PermissionDenied(
                    "cannot delete your own account".to_string(),
                ));
            }

            let target = queries::get_user(&pool.conn, *id)?;
            queries::delete_user(&pool.conn, *id)?;

            let _ = log::ttlog(
                &pool.conn,
                "user_delete",
                &target.username,
                "User and their timesheets deleted",
            );
            success(format!(
                "Deleted user '{}' and their timesheets.",
                target.username
            ));
        }
    }

    Ok(())
}
