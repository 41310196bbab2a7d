use crate::core::calculator::geofence::{GeofenceConfig, evaluate};
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::coordinate::Coordinate;
use crate::models::event::{AttendanceEvent, EmployeeId, NewEvent};
use crate::models::event_type::EventType;
use chrono::{DateTime, Utc};

/// What the capture side reports for one clock-in / clock-out.
#[derive(Debug, Clone)]
pub struct ClockRequest {
    pub employee_id: EmployeeId,
    pub kind: EventType,
    pub coordinate: Option<Coordinate>,
    pub photo_ref: Option<String>,
    /// Explicit instant for manual corrections; `None` means now.
    pub at: Option<DateTime<Utc>>,
}

/// High-level business logic for the `clock` command.
pub struct ClockLogic;

impl ClockLogic {
    /// Evaluate the geofence once and persist the event with that label.
    /// The returned event is the stored one (timestamp at whole seconds).
    pub fn record<S: EventStore>(
        store: &mut S,
        geofence: &GeofenceConfig,
        request: ClockRequest,
    ) -> AppResult<AttendanceEvent> {
        let gps_status = evaluate(request.coordinate, geofence);

        let timestamp = request.at.unwrap_or_else(Utc::now);

        let new_event = NewEvent {
            employee_id: request.employee_id,
            timestamp,
            kind: request.kind,
            coordinate: request.coordinate,
            gps_status,
            photo_ref: request.photo_ref,
            source: "cli".to_string(),
        };

        store.insert_event(&new_event)
    }
}
