//! Date and range parsing for CLI filters.
//!
//! Ranges are given in local calendar days and converted to a half-open UTC
//! interval `[start of first day, start of the day after the last day)`.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse `--at` values: `YYYY-MM-DD HH:MM[:SS]` in local time, or RFC 3339.
pub fn parse_local_datetime(s: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))?;

    local_to_utc(naive).ok_or_else(|| {
        AppError::InvalidTimestamp(format!("{s} (ambiguous or skipped local time)"))
    })
}

fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

fn day_start_utc(d: NaiveDate) -> AppResult<DateTime<Utc>> {
    d.and_hms_opt(0, 0, 0)
        .and_then(local_to_utc)
        .ok_or_else(|| AppError::InvalidDate(d.to_string()))
}

/// UTC bounds `[from, to)` covering the local days `start..=end`.
pub fn range_to_utc(start: NaiveDate, end: NaiveDate) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
    let after_end = end
        .succ_opt()
        .ok_or_else(|| AppError::InvalidDate(end.to_string()))?;
    Ok((day_start_utc(start)?, day_start_utc(after_end)?))
}

fn invalid(msg: &str) -> AppError {
    AppError::InvalidRange(msg.to_string())
}

/// First and last day of a single period: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid("invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid("invalid year"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid("invalid year"))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid("invalid month"))?;
            let next = if d1.month() == 12 {
                NaiveDate::from_ymd_opt(d1.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(d1.year(), d1.month() + 1, 1)
            };
            let d2 = next
                .and_then(|n| n.pred_opt())
                .ok_or_else(|| invalid("invalid month"))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(|| invalid("invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid("unsupported range format")),
    }
}

/// Parse --range (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let Some((start_raw, end_raw)) = r.split_once(':') else {
        return period_bounds(r.trim());
    };

    let start = start_raw.trim();
    let end = end_raw.trim();

    if start.len() != end.len() {
        return Err(invalid("start and end must have same format"));
    }

    let (d1, _) = period_bounds(start)?;
    let (_, d2) = period_bounds(end)?;

    if d1 > d2 {
        return Err(invalid("start is after end"));
    }

    Ok((d1, d2))
}

/// `None` / `"all"` → no bounds; otherwise the UTC interval of the range.
pub fn optional_range_to_utc(
    range: Option<&str>,
) -> AppResult<Option<(DateTime<Utc>, DateTime<Utc>)>> {
    match range {
        None => Ok(None),
        Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => {
            let (d1, d2) = parse_range(r)?;
            Ok(Some(range_to_utc(d1, d2)?))
        }
    }
}
