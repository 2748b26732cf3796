use crate::auth::session;
use crate::cli::parser::{Commands, CompanyAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{log, queries};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Company { action } = cmd else {
        return Ok(());
    };

    session::require_admin()?;
    let pool = DbPool::new(&cfg.database)?;

    match action {
        CompanyAction::Add { name } => {
            queries::insert_company(&pool.conn, name)?;
            let _ = log::ttlog(&pool.conn, "company_add", name, "Company registered");
            success(format!("Registered company '{}'.", name));
        }

        CompanyAction::List => {
            let companies = queries::load_companies(&pool.conn)?;

            let mut table = Table::new(vec![Column::new("ID", 5), Column::new("COMPANY", 30)]);
            for c in &companies {
                table.add_row(vec![c.id.to_string(), c.company_name.clone()]);
            }

            print!("{}", table.render());
        }
    }

    Ok(())
}
