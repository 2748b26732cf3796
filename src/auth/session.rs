//! Logged-in user session, persisted as a small YAML file in the config
//! directory. Written by `login`, removed by `logout`, consulted by every
//! command that needs the current user or an admin guard.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::user::Role;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

pub fn save(session: &Session) -> AppResult<()> {
    fs::create_dir_all(Config::config_dir())?;
    let yaml = serde_yaml::to_string(session)
        .map_err(|e| AppError::Other(format!("session serialization: {e}")))?;
    fs::write(Config::session_file(), yaml)?;
    Ok(())
}

pub fn load() -> Option<Session> {
    let path = Config::session_file();
    let content = fs::read_to_string(path).ok()?;
    serde_yaml::from_str(&content).ok()
}

pub fn clear() -> AppResult<()> {
    let path = Config::session_file();
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// The logged-in user, or an error when no session exists.
pub fn current() -> AppResult<Session> {
    load().ok_or(AppError::NotLoggedIn)
}

/// The logged-in user, required to be an admin.
pub fn require_admin() -> AppResult<Session> {
    let session = current()?;
    if !session.role.is_admin() {
        return Err(AppError::PermissionDenied(format!(
            "'{}' is not an admin",
            session.username
        )));
    }
    Ok(session)
}
