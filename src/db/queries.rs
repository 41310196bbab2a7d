use crate::db::store::EventFilter;
use crate::errors::{AppError, AppResult};
use crate::models::coordinate::Coordinate;
use crate::models::employee::Employee;
use crate::models::event::{
    AttendanceEvent, EmployeeId, NewEvent, format_timestamp, storage_ceil,
};
use crate::models::event_type::EventType;
use crate::models::gps_status::GpsStatus;
use chrono::{DateTime, Local, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, ToSql, params};

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

pub fn map_event_row(row: &Row) -> Result<AttendanceEvent> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = DateTime::parse_from_rfc3339(&ts_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(2, AppError::InvalidTimestamp(ts_str.clone())))?;

    let kind_str: String = row.get("kind")?;
    let kind = EventType::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(3, AppError::InvalidEventKind(kind_str.clone())))?;

    let status_str: String = row.get("gps_status")?;
    let gps_status = GpsStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(6, AppError::InvalidGpsStatus(status_str.clone())))?;

    let latitude: Option<f64> = row.get("latitude")?;
    let longitude: Option<f64> = row.get("longitude")?;
    let coordinate = match (latitude, longitude) {
        (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
        _ => None,
    };

    Ok(AttendanceEvent {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        timestamp,
        kind,
        coordinate,
        gps_status,
        photo_ref: row.get("photo_ref")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// Store `ev` at whole-second precision and return exactly what was stored.
pub fn insert_event(conn: &Connection, ev: &NewEvent) -> AppResult<AttendanceEvent> {
    let ev = ev.at_storage_precision();
    let created_at = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO events (employee_id, timestamp, kind, latitude, longitude, gps_status, photo_ref, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            ev.employee_id,
            format_timestamp(&ev.timestamp),
            ev.kind.to_db_str(),
            ev.coordinate.map(|c| c.latitude),
            ev.coordinate.map(|c| c.longitude),
            ev.gps_status.to_db_str(),
            ev.photo_ref,
            ev.source,
            created_at,
        ],
    )?;

    let id = conn.last_insert_rowid();
    Ok(ev.into_event(id, created_at))
}

/// Load events matching `filter`, ordered by timestamp then id.
pub fn load_events(conn: &Connection, filter: &EventFilter) -> AppResult<Vec<AttendanceEvent>> {
    let mut sql = String::from("SELECT * FROM events WHERE 1=1");
    let mut args: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(emp) = filter.employee_id {
        args.push(Box::new(emp));
        sql.push_str(&format!(" AND employee_id = ?{}", args.len()));
    }
    if let Some(from) = filter.from {
        args.push(Box::new(format_timestamp(&storage_ceil(&from))));
        sql.push_str(&format!(" AND timestamp >= ?{}", args.len()));
    }
    if let Some(to) = filter.to {
        args.push(Box::new(format_timestamp(&storage_ceil(&to))));
        sql.push_str(&format!(" AND timestamp < ?{}", args.len()));
    }
    sql.push_str(" ORDER BY timestamp ASC, id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        rusqlite::params_from_iter(args.iter().map(|a| a.as_ref())),
        map_event_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Employees
// ---------------------------

fn map_employee_row(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        pin_hash: row.get("pin_hash")?,
        active: row.get::<_, i32>("active")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_employee(conn: &Connection, name: &str, pin_hash: &str) -> AppResult<Employee> {
    if find_employee_by_name(conn, name)?.is_some() {
        return Err(AppError::DuplicateEmployee(name.to_string()));
    }

    let created_at = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO employees (name, pin_hash, active, created_at) VALUES (?1, ?2, 1, ?3)",
        params![name, pin_hash, created_at],
    )?;

    Ok(Employee {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        pin_hash: pin_hash.to_string(),
        active: true,
        created_at,
    })
}

pub fn find_employee_by_name(conn: &Connection, name: &str) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM employees WHERE name = ?1")?;
    Ok(stmt.query_row([name], map_employee_row).optional()?)
}

pub fn find_employee_by_id(conn: &Connection, id: EmployeeId) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM employees WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_employee_row).optional()?)
}

pub fn list_employees(conn: &Connection, include_inactive: bool) -> AppResult<Vec<Employee>> {
    let sql = if include_inactive {
        "SELECT * FROM employees ORDER BY name ASC"
    } else {
        "SELECT * FROM employees WHERE active = 1 ORDER BY name ASC"
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map_employee_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Mark an employee inactive. Employees are never deleted: their events
/// keep referencing them.
pub fn deactivate_employee(conn: &Connection, name: &str) -> AppResult<Employee> {
    let emp =
        find_employee_by_name(conn, name)?.ok_or_else(|| AppError::UnknownEmployee(name.into()))?;

    conn.execute("UPDATE employees SET active = 0 WHERE id = ?1", [emp.id])?;

    Ok(Employee {
        active: false,
        ..emp
    })
}
