use serde::{Deserialize, Serialize};
use std::fmt;

/// Geofence classification computed when an event is captured.
///
/// The label is persisted together with the event and is never recomputed,
/// even if the office location or radius changes later.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GpsStatus {
    Ok,
    OutOfRange,
    Searching,
}

impl GpsStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GpsStatus::Ok => "OK",
            GpsStatus::OutOfRange => "OUT_OF_RANGE",
            GpsStatus::Searching => "SEARCHING",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "OK" => Some(GpsStatus::Ok),
            "OUT_OF_RANGE" => Some(GpsStatus::OutOfRange),
            "SEARCHING" => Some(GpsStatus::Searching),
            _ => None,
        }
    }
}

impl fmt::Display for GpsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
