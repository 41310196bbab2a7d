//! The storage capability handed to the recording and reporting code.
//!
//! Writes are append-only: the trait has no way to update or remove an event.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::event::{AttendanceEvent, EmployeeId, NewEvent};
use chrono::{DateTime, Local, Utc};

/// Selection applied by [`EventStore::query_events`].
///
/// `from` is inclusive, `to` is exclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub employee_id: Option<EmployeeId>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl EventFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_employee(mut self, employee_id: EmployeeId) -> Self {
        self.employee_id = Some(employee_id);
        self
    }

    pub fn between(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn matches(&self, ev: &AttendanceEvent) -> bool {
        self.employee_id.is_none_or(|id| ev.employee_id == id)
            && self.from.is_none_or(|from| ev.timestamp >= from)
            && self.to.is_none_or(|to| ev.timestamp < to)
    }
}

pub trait EventStore {
    /// Persist one event and return it with its store-assigned id.
    fn insert_event(&mut self, event: &NewEvent) -> AppResult<AttendanceEvent>;

    /// Snapshot of the committed events matching `filter`, ordered by
    /// timestamp then id.
    fn query_events(&self, filter: &EventFilter) -> AppResult<Vec<AttendanceEvent>>;
}

impl EventStore for DbPool {
    fn insert_event(&mut self, event: &NewEvent) -> AppResult<AttendanceEvent> {
        queries::insert_event(&self.conn, event)
    }

    fn query_events(&self, filter: &EventFilter) -> AppResult<Vec<AttendanceEvent>> {
        queries::load_events(&self.conn, filter)
    }
}

/// Store kept entirely in memory, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: Vec<AttendanceEvent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventStore for MemoryStore {
    fn insert_event(&mut self, event: &NewEvent) -> AppResult<AttendanceEvent> {
        let id = self.events.len() as i64 + 1;
        let stored = event
            .at_storage_precision()
            .into_event(id, Local::now().to_rfc3339());
        self.events.push(stored.clone());
        Ok(stored)
    }

    fn query_events(&self, filter: &EventFilter) -> AppResult<Vec<AttendanceEvent>> {
        let mut out: Vec<AttendanceEvent> = self
            .events
            .iter()
            .filter(|ev| filter.matches(ev))
            .cloned()
            .collect();
        out.sort_by_key(|e| (e.timestamp, e.id));
        Ok(out)
    }
}
