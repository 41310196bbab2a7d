pub mod backup;
pub mod clock;
pub mod config;
pub mod db;
pub mod employee;
pub mod events;
pub mod export;
pub mod init;
pub mod log;
pub mod shifts;
pub mod status;

use crate::db::queries::find_employee_by_name;
use crate::errors::{AppError, AppResult};
use crate::models::event::EmployeeId;
use rusqlite::Connection;

/// Resolve an optional `--employee` filter to its id.
pub(crate) fn resolve_employee(conn: &Connection, name: Option<&str>) -> AppResult<Option<EmployeeId>> {
    match name {
        None => Ok(None),
        Some(n) => find_employee_by_name(conn, n)?
            .map(|e| Some(e.id))
            .ok_or_else(|| AppError::UnknownEmployee(n.to_string())),
    }
}
