// src/export/logic.rs

use crate::core::logic::display_name;
use crate::core::report::ReportLogic;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::store::{EventFilter, EventStore};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export raw events selected by `filter`.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    ///
    /// Returns the number of rows written (0 when nothing matched, in which
    /// case no file is created).
    pub fn export(
        pool: &DbPool,
        format: &ExportFormat,
        file: &str,
        filter: &EventFilter,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let rows = Self::rows(pool, filter)?;

        if rows.is_empty() {
            warning("No events found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog_or_warn(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} events as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }

    /// Chronological export rows with employee names resolved.
    pub fn rows(pool: &DbPool, filter: &EventFilter) -> AppResult<Vec<EventExport>> {
        let names = ReportLogic::employee_names(&pool.conn)?;
        let events = pool.query_events(filter)?;

        Ok(events
            .iter()
            .map(|ev| EventExport::from_event(ev, display_name(&names, ev.employee_id)))
            .collect())
    }
}
