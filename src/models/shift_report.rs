use crate::core::calculator::shifts::{PairingIssue, Shift};
use crate::models::event::{AttendanceEvent, EmployeeId};

/// Per-employee aggregate over the shifts of one report.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeTotals {
    pub employee_id: EmployeeId,
    pub name: String,
    pub shifts: usize,
    pub hours: f64,
    pub overtime_shifts: usize,
    pub overtime_hours: f64,
}

/// Admin-facing view of one snapshot of events.
#[derive(Debug, Default, Clone)]
pub struct ShiftReport {
    pub shifts: Vec<Shift>,
    pub issues: Vec<PairingIssue>,
    pub open: Vec<AttendanceEvent>,
    pub totals: Vec<EmployeeTotals>,
}
