use crate::cli::commands::resolve_employee;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store::EventFilter;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::optional_range_to_utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        employee,
        force,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        let filter = build_filter(&pool, range.as_deref(), employee.as_deref())?;

        ExportLogic::export(&pool, format, file, &filter, *force)?;
    }
    Ok(())
}

/// Shared by the read-only commands: `--range` and `--employee` as a filter.
pub(crate) fn build_filter(
    pool: &DbPool,
    range: Option<&str>,
    employee: Option<&str>,
) -> AppResult<EventFilter> {
    let mut filter = EventFilter::all();
    if let Some((from, to)) = optional_range_to_utc(range)? {
        filter = filter.between(from, to);
    }
    if let Some(id) = resolve_employee(&pool.conn, employee)? {
        filter = filter.for_employee(id);
    }
    Ok(filter)
}
