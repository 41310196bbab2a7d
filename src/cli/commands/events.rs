use crate::cli::commands::export::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::display_name;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::colorize_in_out;
use crate::utils::formatting::{colorize_gps_status, colorize_optional, format_coordinate};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Events { range, employee } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let filter = build_filter(&pool, range.as_deref(), employee.as_deref())?;

        let names = ReportLogic::employee_names(&pool.conn)?;
        let events = pool.query_events(&filter)?;

        if events.is_empty() {
            info("No events found.");
            return Ok(());
        }

        let mut table = Table::new(
            vec!["ID", "Time", "Employee", "Action", "GPS", "Position", "Photo"],
            cfg.separator(),
        );

        for ev in &events {
            let label = ev.kind.label();
            table.add_row(vec![
                ev.id.to_string(),
                ev.local_time_str(),
                display_name(&names, ev.employee_id),
                colorize_in_out(label, ev.kind.is_in()),
                colorize_gps_status(ev.gps_status),
                colorize_optional(&format_coordinate(ev.coordinate)),
                colorize_optional(ev.photo_ref.as_deref().unwrap_or("--")),
            ]);
        }

        print!("{}", table.render());
        println!("\n{} event(s)", events.len());
    }

    Ok(())
}
