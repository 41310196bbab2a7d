// src/export/model.rs

use crate::models::event::AttendanceEvent;
use serde::Serialize;

/// Flat export row, built from raw events (never from reconstructed shifts).
///
/// Field names are the CSV column headers.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventExport {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Employee Name")]
    pub employee_name: String,
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "GPS Status")]
    pub gps_status: String,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
}

impl EventExport {
    pub fn from_event(ev: &AttendanceEvent, employee_name: String) -> Self {
        Self {
            timestamp: ev.local_time_str(),
            employee_name,
            action: ev.kind.label().to_string(),
            gps_status: ev.gps_status.as_str().to_string(),
            latitude: ev.latitude(),
            longitude: ev.longitude(),
        }
    }
}
