use crate::config::Config;
use crate::core::logic::display_name;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::db::store::EventFilter;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::colorize_gps_status;
use crate::utils::hours2readable;
use crate::utils::table::Table;
use chrono::Utc;

/// Employees whose latest IN has no OUT yet.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;
    let names = ReportLogic::employee_names(&pool.conn)?;
    let report = ReportLogic::build(&pool, &names, &EventFilter::all(), &cfg.shift_policy())?;

    if report.open.is_empty() {
        info("Nobody is clocked in.");
        return Ok(());
    }

    let now = Utc::now();
    let mut table = Table::new(vec!["Employee", "Since", "Elapsed", "GPS"], cfg.separator());

    for ev in &report.open {
        let elapsed = (now - ev.timestamp).num_minutes().max(0) as f64 / 60.0;
        table.add_row(vec![
            display_name(&names, ev.employee_id),
            ev.local_time_str(),
            hours2readable(elapsed),
            colorize_gps_status(ev.gps_status),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
