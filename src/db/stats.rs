use crate::db::migrate::pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::{DateTime, Local};
use rusqlite::OptionalExtension;
use std::fs;

/// Headline numbers shown by `db --info`.
#[derive(Debug, Default)]
pub struct DbStats {
    pub file_size: u64,
    pub events: i64,
    pub employees: i64,
    pub active_employees: i64,
    pub first_event: Option<String>,
    pub last_event: Option<String>,
    pub out_of_range_events: i64,
    pub pending_migrations: usize,
}

pub fn collect(pool: &DbPool, db_path: &str) -> AppResult<DbStats> {
    let conn = &pool.conn;

    let count = |sql: &str| -> rusqlite::Result<i64> { conn.query_row(sql, [], |row| row.get(0)) };

    let first_event: Option<String> = conn
        .query_row(
            "SELECT timestamp FROM events ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_event: Option<String> = conn
        .query_row(
            "SELECT timestamp FROM events ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(DbStats {
        file_size: fs::metadata(db_path).map(|m| m.len()).unwrap_or(0),
        events: count("SELECT COUNT(*) FROM events")?,
        employees: count("SELECT COUNT(*) FROM employees")?,
        active_employees: count("SELECT COUNT(*) FROM employees WHERE active = 1")?,
        first_event,
        last_event,
        out_of_range_events: count("SELECT COUNT(*) FROM events WHERE gps_status = 'OUT_OF_RANGE'")?,
        pending_migrations: pending_migrations(conn)?.len(),
    })
}

fn local(ts: Option<&String>) -> String {
    ts.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"))
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    let s = collect(pool, db_path)?;
    let file_mb = (s.file_size as f64) / (1024.0 * 1024.0);

    println!();
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
    println!(
        "{}• Employees:{} {}{}{} ({} active)",
        CYAN, RESET, GREEN, s.employees, RESET, s.active_employees
    );
    println!(
        "{}• Total events:{} {}{}{} ({} out of range)",
        CYAN, RESET, GREEN, s.events, RESET, s.out_of_range_events
    );
    println!("{}• Event range:{}", CYAN, RESET);
    println!("    from: {}", local(s.first_event.as_ref()));
    println!("    to:   {}", local(s.last_event.as_ref()));

    if s.pending_migrations > 0 {
        println!(
            "{}• Pending migrations:{} {}{}{}",
            CYAN, RESET, YELLOW, s.pending_migrations, RESET
        );
    }

    println!();
    Ok(())
}
