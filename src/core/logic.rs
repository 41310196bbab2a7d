use crate::core::calculator::shifts::{ShiftPolicy, reconstruct_detailed};
use crate::models::event::{AttendanceEvent, EmployeeId};
use crate::models::shift_report::{EmployeeTotals, ShiftReport};
use std::collections::{BTreeMap, HashMap};

pub struct Core;

impl Core {
    /// Reconstruct shifts over one snapshot and aggregate them per employee.
    ///
    /// `names` maps employee ids to display names; unknown ids are shown as
    /// `#<id>`.
    pub fn build_shift_report(
        events: &[AttendanceEvent],
        names: &HashMap<EmployeeId, String>,
        policy: &ShiftPolicy,
    ) -> ShiftReport {
        let rec = reconstruct_detailed(events, policy);

        let mut by_employee: BTreeMap<EmployeeId, EmployeeTotals> = BTreeMap::new();
        for shift in &rec.shifts {
            let t = by_employee
                .entry(shift.employee_id)
                .or_insert_with(|| EmployeeTotals {
                    employee_id: shift.employee_id,
                    name: display_name(names, shift.employee_id),
                    shifts: 0,
                    hours: 0.0,
                    overtime_shifts: 0,
                    overtime_hours: 0.0,
                });

            t.shifts += 1;
            t.hours += shift.duration_hours;
            if shift.is_overtime {
                t.overtime_shifts += 1;
                t.overtime_hours += shift.overtime_hours(policy);
            }
        }

        let mut totals: Vec<EmployeeTotals> = by_employee.into_values().collect();
        totals.sort_by(|a, b| a.name.cmp(&b.name).then(a.employee_id.cmp(&b.employee_id)));

        ShiftReport {
            shifts: rec.shifts,
            issues: rec.issues,
            open: rec.open,
            totals,
        }
    }
}

pub fn display_name(names: &HashMap<EmployeeId, String>, id: EmployeeId) -> String {
    names
        .get(&id)
        .cloned()
        .unwrap_or_else(|| format!("#{}", id))
}
