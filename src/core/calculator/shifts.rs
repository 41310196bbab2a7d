use crate::models::event::{AttendanceEvent, EmployeeId};
use crate::models::event_type::EventType;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_OVERTIME_THRESHOLD_HOURS: f64 = 8.0;

/// Rules applied while pairing events into shifts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftPolicy {
    /// A shift is overtime when it lasts strictly longer than this.
    pub overtime_threshold_hours: f64,
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        Self {
            overtime_threshold_hours: DEFAULT_OVERTIME_THRESHOLD_HOURS,
        }
    }
}

/// One IN matched with the next OUT of the same employee.
#[derive(Debug, Clone, PartialEq)]
pub struct Shift {
    pub employee_id: EmployeeId,
    pub in_event: AttendanceEvent,
    pub out_event: AttendanceEvent,
    pub duration_hours: f64,
    pub is_overtime: bool,
}

impl Shift {
    /// Hours beyond the overtime threshold, 0 for regular shifts.
    pub fn overtime_hours(&self, policy: &ShiftPolicy) -> f64 {
        if self.is_overtime {
            self.duration_hours - policy.overtime_threshold_hours
        } else {
            0.0
        }
    }
}

/// Data-quality conditions found while pairing.
///
/// None of these produce a shift. They are reported so that an operator can
/// spot missed clock-ins and clock-outs.
#[derive(Debug, Clone, PartialEq)]
pub enum PairingIssue {
    /// An IN left pending when a newer IN of the same employee arrived.
    SupersededIn {
        superseded: AttendanceEvent,
        by: AttendanceEvent,
    },
    /// An OUT with no pending IN.
    OrphanOut(AttendanceEvent),
    /// An IN/OUT pair whose OUT is not strictly after the IN.
    NonPositiveDuration {
        in_event: AttendanceEvent,
        out_event: AttendanceEvent,
    },
}

impl PairingIssue {
    pub fn employee_id(&self) -> EmployeeId {
        match self {
            PairingIssue::SupersededIn { superseded, .. } => superseded.employee_id,
            PairingIssue::OrphanOut(ev) => ev.employee_id,
            PairingIssue::NonPositiveDuration { in_event, .. } => in_event.employee_id,
        }
    }
}

/// Full result of one reconstruction pass.
#[derive(Debug, Default, Clone)]
pub struct Reconstruction {
    /// Completed shifts, most recent IN first.
    pub shifts: Vec<Shift>,
    /// Issues in scan (chronological) order.
    pub issues: Vec<PairingIssue>,
    /// INs still pending at the end of the scan, i.e. employees on the clock.
    pub open: Vec<AttendanceEvent>,
}

/// Pair IN/OUT events into shifts, most recent shift first.
pub fn reconstruct(events: &[AttendanceEvent], policy: &ShiftPolicy) -> Vec<Shift> {
    reconstruct_detailed(events, policy).shifts
}

pub fn reconstruct_detailed(events: &[AttendanceEvent], policy: &ShiftPolicy) -> Reconstruction {
    if events.is_empty() {
        return Reconstruction::default();
    }

    // -----------------------------
    // Sort events chronologically
    // -----------------------------
    // Ties fall back to the store id (insertion order) so the result does not
    // depend on the order the caller passes events in.
    let mut sorted: Vec<&AttendanceEvent> = events.iter().collect();
    sorted.sort_by_key(|e| (e.timestamp, e.id));

    let mut pending: HashMap<EmployeeId, &AttendanceEvent> = HashMap::new();
    let mut shifts = Vec::new();
    let mut issues = Vec::new();

    // -----------------------------
    // Build shifts
    // -----------------------------
    for ev in sorted {
        match ev.kind {
            EventType::In => {
                if let Some(previous) = pending.insert(ev.employee_id, ev) {
                    issues.push(PairingIssue::SupersededIn {
                        superseded: previous.clone(),
                        by: ev.clone(),
                    });
                }
            }
            EventType::Out => match pending.remove(&ev.employee_id) {
                Some(in_ev) => {
                    let worked = ev.timestamp - in_ev.timestamp;

                    if worked <= Duration::zero() {
                        issues.push(PairingIssue::NonPositiveDuration {
                            in_event: in_ev.clone(),
                            out_event: ev.clone(),
                        });
                        continue;
                    }

                    let duration_hours = worked.num_milliseconds() as f64 / 3_600_000.0;

                    shifts.push(Shift {
                        employee_id: ev.employee_id,
                        in_event: in_ev.clone(),
                        out_event: ev.clone(),
                        duration_hours,
                        is_overtime: duration_hours > policy.overtime_threshold_hours,
                    });
                }
                None => issues.push(PairingIssue::OrphanOut(ev.clone())),
            },
        }
    }

    // -----------------------------
    // Most recent shift first
    // -----------------------------
    shifts.sort_by(|a, b| {
        b.in_event
            .timestamp
            .cmp(&a.in_event.timestamp)
            .then(a.employee_id.cmp(&b.employee_id))
            .then(b.in_event.id.cmp(&a.in_event.id))
    });

    let mut open: Vec<AttendanceEvent> = pending.into_values().cloned().collect();
    open.sort_by_key(|e| (e.timestamp, e.id));

    Reconstruction {
        shifts,
        issues,
        open,
    }
}
