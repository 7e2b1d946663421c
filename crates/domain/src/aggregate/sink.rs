//! Event destination consumed by the merger
//!
//! The merger writes through this capability eagerly: one `create` when a
//! run opens, one `update` per extension. Handles are explicit values
//! threaded back through `update`, so a sink never relies on "the last
//! created event".

use chrono::{DateTime, Utc};

use crate::entities::MergedEvent;

/// Opaque reference to an event previously created in a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventHandle(usize);

/// Full field set written on create and update
#[derive(Debug, Clone, PartialEq)]
pub struct EventFields {
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub stamp: DateTime<Utc>,
    pub created: DateTime<Utc>,
}

impl From<&EventFields> for MergedEvent {
    fn from(fields: &EventFields) -> Self {
        Self {
            uid: fields.uid.clone(),
            summary: fields.summary.clone(),
            description: fields.description.clone(),
            start: fields.start,
            end: fields.end,
            stamp: fields.stamp,
            created: fields.created,
        }
    }
}

/// Destination for merged events
pub trait EventSink {
    /// Create a new event and return a handle for later updates
    fn create(&mut self, fields: &EventFields) -> EventHandle;

    /// Replace the fields of a previously created event
    fn update(&mut self, handle: EventHandle, fields: &EventFields);
}

/// In-memory sink that materializes events in creation order
///
/// This is the collect-then-serialize half of the pipeline: the merger
/// writes eagerly, and once the pass is over `into_events` yields the final
/// ordered event list for the calendar serializer.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<MergedEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events collected so far, in creation order
    #[must_use]
    pub fn events(&self) -> &[MergedEvent] {
        &self.events
    }

    /// Consume the log, yielding the final ordered event list
    #[must_use]
    pub fn into_events(self) -> Vec<MergedEvent> {
        self.events
    }
}

impl EventSink for EventLog {
    fn create(&mut self, fields: &EventFields) -> EventHandle {
        self.events.push(fields.into());
        EventHandle(self.events.len() - 1)
    }

    fn update(&mut self, handle: EventHandle, fields: &EventFields) {
        if let Some(event) = self.events.get_mut(handle.0) {
            *event = fields.into();
        }
    }
}
