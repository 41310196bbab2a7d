use super::{coordinate::Coordinate, event_type::EventType, gps_status::GpsStatus};
use chrono::{DateTime, Local, SecondsFormat, SubsecRound, TimeDelta, Utc};
use serde::Serialize;

pub type EmployeeId = i64;

/// A persisted clock-in / clock-out record.
///
/// Events are append-only: once stored they are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceEvent {
    pub id: i64,                         // ⇔ events.id (store-assigned, insertion order)
    pub employee_id: EmployeeId,         // ⇔ events.employee_id
    pub timestamp: DateTime<Utc>,        // ⇔ events.timestamp (TEXT, RFC 3339 UTC)
    pub kind: EventType,                 // ⇔ events.kind ('in' | 'out')
    pub coordinate: Option<Coordinate>,  // ⇔ events.latitude / events.longitude
    pub gps_status: GpsStatus,           // ⇔ events.gps_status
    pub photo_ref: Option<String>,       // ⇔ events.photo_ref
    pub source: String,                  // ⇔ events.source (default 'cli')
    pub created_at: String,              // ⇔ events.created_at (RFC 3339)
}

impl AttendanceEvent {
    pub fn timestamp_str(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// Timestamp rendered in the local timezone, as shown to administrators.
    pub fn local_time_str(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinate.map(|c| c.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinate.map(|c| c.longitude)
    }
}

/// An event that has passed geofence evaluation and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub employee_id: EmployeeId,
    pub timestamp: DateTime<Utc>,
    pub kind: EventType,
    pub coordinate: Option<Coordinate>,
    pub gps_status: GpsStatus,
    pub photo_ref: Option<String>,
    pub source: String,
}

impl NewEvent {
    /// Copy with the timestamp at storage precision (whole seconds).
    pub fn at_storage_precision(&self) -> Self {
        Self {
            timestamp: storage_floor(&self.timestamp),
            ..self.clone()
        }
    }

    /// Materialize the stored form once the store has assigned an id.
    pub fn into_event(self, id: i64, created_at: String) -> AttendanceEvent {
        AttendanceEvent {
            id,
            employee_id: self.employee_id,
            timestamp: self.timestamp,
            kind: self.kind,
            coordinate: self.coordinate,
            gps_status: self.gps_status,
            photo_ref: self.photo_ref,
            source: self.source,
            created_at,
        }
    }
}

/// Canonical storage format. Fixed width so that TEXT ordering in SQLite
/// matches chronological ordering. Callers pass values already at storage
/// precision: sub-seconds are not rendered.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Stored timestamps are whole seconds.
pub fn storage_floor(ts: &DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(0)
}

/// Smallest whole second not before `ts`.
///
/// For whole-second timestamps `t`, `t >= b` iff `t >= storage_ceil(b)`, and
/// likewise for `<`. Filter bounds are rounded this way before they reach SQL.
pub fn storage_ceil(ts: &DateTime<Utc>) -> DateTime<Utc> {
    let floor = storage_floor(ts);
    if floor == *ts {
        floor
    } else {
        floor + TimeDelta::seconds(1)
    }
}
