pub mod coordinate;
pub mod employee;
pub mod event;
pub mod event_type;
pub mod gps_status;
pub mod shift_report;
