pub mod geofence;
pub mod shifts;
