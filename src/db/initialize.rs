//! Schema bootstrap for the attendance database.

use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// Triggers that make `events` append-only.
const APPEND_ONLY_TRIGGERS: &[&str] = &["events_no_update", "events_no_delete"];

/// Bring the schema up to date, then refuse to continue if the
/// append-only guards on `events` have been removed.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    verify_append_only(conn)
}

/// Names of the append-only triggers absent from `events`.
pub fn missing_append_only_triggers(conn: &Connection) -> AppResult<Vec<&'static str>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'trigger' AND tbl_name = 'events' AND name = ?1",
    )?;

    let mut missing = Vec::new();
    for &name in APPEND_ONLY_TRIGGERS {
        let found: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
        if found.is_none() {
            missing.push(name);
        }
    }
    Ok(missing)
}

pub fn verify_append_only(conn: &Connection) -> AppResult<()> {
    let missing = missing_append_only_triggers(conn)?;
    if missing.is_empty() {
        return Ok(());
    }
    Err(AppError::Migration(format!(
        "events table is not append-only (missing triggers: {})",
        missing.join(", ")
    )))
}
