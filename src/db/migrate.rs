use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// One schema step. Applied steps are recorded in the `log` table as
/// `operation = 'migration_applied'`, `target = version`.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250901_0001_create_employees",
        description: "Created employees table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE COLLATE NOCASE,
            pin_hash    TEXT NOT NULL,
            active      INTEGER NOT NULL DEFAULT 1 CHECK(active IN (0,1)),
            created_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250901_0002_create_events",
        description: "Created events table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  INTEGER NOT NULL REFERENCES employees(id),
            timestamp    TEXT NOT NULL,
            kind         TEXT NOT NULL CHECK(kind IN ('in','out')),
            latitude     REAL,
            longitude    REAL,
            gps_status   TEXT NOT NULL CHECK(gps_status IN ('OK','OUT_OF_RANGE','SEARCHING')),
            photo_ref    TEXT,
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL,
            CHECK ((latitude IS NULL) = (longitude IS NULL))
        );

        CREATE INDEX IF NOT EXISTS idx_events_timestamp ON events(timestamp);
        CREATE INDEX IF NOT EXISTS idx_events_employee_timestamp ON events(employee_id, timestamp);
        "#,
    },
    Migration {
        version: "20250910_0003_events_append_only",
        description: "Events are now append-only (update/delete rejected)",
        sql: r#"
        CREATE TRIGGER IF NOT EXISTS events_no_update
        BEFORE UPDATE ON events
        BEGIN
            SELECT RAISE(ABORT, 'attendance events are append-only');
        END;

        CREATE TRIGGER IF NOT EXISTS events_no_delete
        BEFORE DELETE ON events
        BEGIN
            SELECT RAISE(ABORT, 'attendance events are append-only');
        END;
        "#,
    },
];

/// Ensure that the `log` table exists. It also holds the migration history,
/// so it is created before anything else.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), m.version, m.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Versions not yet applied to this database, in application order.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        apply(conn, m)?;
        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}
