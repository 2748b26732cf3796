use crate::config::Config;
use crate::core::dashboard::{billable_split, hours_per_user, monthly_trend};
use crate::core::summary::DashboardTotals;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::today;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    let rows = queries::load_all_entries(&pool.conn)?;
    let total_users = queries::count_users(&pool.conn)?;
    let total_companies = queries::count_companies(&pool.conn)?;

    let totals = DashboardTotals::compute(total_users, total_companies, &rows, today());

    header("Dashboard");

    println!("{}• Users:{} {}", CYAN, RESET, totals.total_users);
    println!("{}• Companies:{} {}", CYAN, RESET, totals.total_companies);
    println!("{}• Entries:{} {}", CYAN, RESET, totals.total_entries);
    println!(
        "{}• Hours this month:{} {}{:.2}{}",
        CYAN, RESET, GREEN, totals.total_hours_this_month, RESET
    );
    println!(
        "{}• Billable amount:{} {}{}{:.2}{}",
        CYAN, RESET, GREEN, cfg.currency_symbol, totals.billable_amount, RESET
    );
    println!(
        "{}• Top user:{} {}",
        CYAN,
        RESET,
        totals.top_user.as_deref().unwrap_or("--")
    );

    //
    // Hours per user
    //
    let per_user = hours_per_user(&rows);

    println!("\n{}Hours per user{}", YELLOW, RESET);
    if per_user.is_empty() {
        println!("{}  (no entries){}", GREY, RESET);
    } else {
        for (name, hours) in &per_user {
            println!("  {:<20} {:>8.2} h", name, hours);
        }
    }

    //
    // Billable split
    //
    let split = billable_split(&rows);

    println!("\n{}Billable split{}", YELLOW, RESET);
    println!("  billable      {}", split.billable);
    println!("  non-billable  {}", split.non_billable);

    //
    // Six month trend
    //
    let trend = monthly_trend(&rows, today());

    println!("\n{}Hours, last six months{}", YELLOW, RESET);
    for point in &trend {
        println!("  {:<10} {:>8.2} h", point.month_label, point.total_hours);
    }

    println!();

    Ok(())
}
