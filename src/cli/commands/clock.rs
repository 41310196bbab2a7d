use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{ClockLogic, ClockRequest};
use crate::core::config::OFFICE_UNSET;
use crate::core::identity::authenticate;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::coordinate::Coordinate;
use crate::models::gps_status::GpsStatus;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_local_datetime;
use crate::utils::formatting::colorize_gps_status;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock {
        kind,
        employee,
        pin,
        lat,
        lon,
        photo,
        at,
    } = cmd
    {
        let mut pool = DbPool::open(&cfg.database)?;
        let emp = authenticate(&pool.conn, employee, pin)?;

        let coordinate = Coordinate::from_parts(*lat, *lon)?;
        let at = at.as_deref().map(parse_local_datetime).transpose()?;

        let request = ClockRequest {
            employee_id: emp.id,
            kind: *kind,
            coordinate,
            photo_ref: photo.clone(),
            at,
        };

        let ev = ClockLogic::record(&mut pool, &cfg.geofence(), request)?;

        let operation = if ev.kind.is_in() { "clock_in" } else { "clock_out" };
        ttlog_or_warn(
            &pool.conn,
            operation,
            &emp.name,
            &format!(
                "Event #{} at {} ({})",
                ev.id,
                ev.timestamp_str(),
                ev.gps_status.as_str()
            ),
        );

        success(format!(
            "{} recorded for {} at {} [{}]",
            ev.kind.label(),
            emp.name,
            ev.local_time_str(),
            colorize_gps_status(ev.gps_status)
        ));

        match ev.gps_status {
            GpsStatus::Ok => {}
            GpsStatus::OutOfRange => {
                warning("Position is outside the office geofence.");
                if cfg.office_is_unset() {
                    warning(OFFICE_UNSET);
                }
            }
            GpsStatus::Searching => warning("No position was reported."),
        }
    }

    Ok(())
}
