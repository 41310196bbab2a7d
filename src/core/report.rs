use crate::core::calculator::shifts::ShiftPolicy;
use crate::core::logic::Core;
use crate::db::queries::list_employees;
use crate::db::store::{EventFilter, EventStore};
use crate::errors::AppResult;
use crate::models::event::EmployeeId;
use crate::models::shift_report::ShiftReport;
use rusqlite::Connection;
use std::collections::HashMap;

/// Reporting side: read a snapshot, reconstruct, aggregate. Nothing is
/// cached between calls.
pub struct ReportLogic;

impl ReportLogic {
    pub fn build<S: EventStore>(
        store: &S,
        names: &HashMap<EmployeeId, String>,
        filter: &EventFilter,
        policy: &ShiftPolicy,
    ) -> AppResult<ShiftReport> {
        let events = store.query_events(filter)?;
        Ok(Core::build_shift_report(&events, names, policy))
    }

    /// Display names of every employee, inactive ones included.
    pub fn employee_names(conn: &Connection) -> AppResult<HashMap<EmployeeId, String>> {
        Ok(list_employees(conn, true)?
            .into_iter()
            .map(|e| (e.id, e.name))
            .collect())
    }
}
