//! Formatting utilities used for CLI outputs.

use crate::models::coordinate::Coordinate;
use crate::models::gps_status::GpsStatus;
use crate::utils::colors::{GREEN, GREY, RED, RESET, YELLOW};
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI escape regex"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// `9.5` → `09h 30m`. Rounded to the nearest minute.
pub fn hours2readable(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let m = total_minutes.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

pub fn format_coordinate(c: Option<Coordinate>) -> String {
    match c {
        Some(c) => format!("{:.6}, {:.6}", c.latitude, c.longitude),
        None => "--".to_string(),
    }
}

pub fn colorize_gps_status(status: GpsStatus) -> String {
    let color = match status {
        GpsStatus::Ok => GREEN,
        GpsStatus::OutOfRange => RED,
        GpsStatus::Searching => YELLOW,
    };
    format!("{color}{}{RESET}", status.as_str())
}

pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
