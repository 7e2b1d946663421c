//! iCalendar serialization adapter
//!
//! Renders the merged events into an RFC 5545 document. Datetimes are
//! always UTC with the `Z` suffix; one VEVENT per merged run.

use application::error::ApplicationError;
use application::ports::CalendarPort;
use chrono::{DateTime, Utc};
use domain::MergedEvent;
use icalendar::{Calendar, Component};

/// Adapter rendering merged events with the `icalendar` crate
#[derive(Debug, Clone, Default)]
pub struct IcsCalendarAdapter;

impl IcsCalendarAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn utc_stamp(at: DateTime<Utc>) -> String {
        at.format("%Y%m%dT%H%M%SZ").to_string()
    }
}

impl CalendarPort for IcsCalendarAdapter {
    fn render(
        &self,
        calendar_name: &str,
        events: &[MergedEvent],
    ) -> Result<String, ApplicationError> {
        let mut cal = Calendar::new();
        cal.name(calendar_name);
        cal.timezone("UTC");

        for event in events {
            let mut ics_event = icalendar::Event::new();
            ics_event.uid(&event.uid);
            ics_event.summary(&event.summary);
            ics_event.description(&event.description);
            ics_event.add_property("DTSTAMP", Self::utc_stamp(event.stamp));
            ics_event.add_property("DTSTART", Self::utc_stamp(event.start));
            ics_event.add_property("DTEND", Self::utc_stamp(event.end));
            ics_event.add_property("CREATED", Self::utc_stamp(event.created));
            cal.push(ics_event.done());
        }

        Ok(cal.done().to_string())
    }
}
