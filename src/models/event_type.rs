use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an attendance event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    In,
    Out,
}

impl EventType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventType::In => "in",
            EventType::Out => "out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(EventType::In),
            "out" => Some(EventType::Out),
            _ => None,
        }
    }

    /// Label used in reports and exports ("IN" / "OUT").
    pub fn label(&self) -> &'static str {
        match self {
            EventType::In => "IN",
            EventType::Out => "OUT",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventType::In)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
