use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            println!("{}(log is empty){}", GREY, RESET);
            return Ok(());
        }

        for (date, operation, message) in &rows {
            println!(
                "{}{}{} {}[{}]{} {}",
                GREY, date, RESET, CYAN, operation, RESET, message
            );
        }
    }

    Ok(())
}
