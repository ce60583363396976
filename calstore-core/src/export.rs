//! ICS export.
//!
//! Renders the event collection as a single RFC 5545 calendar so it can be
//! imported into other calendar apps. Every event becomes an all-day VEVENT.

use icalendar::{Calendar, Component, EventLike};

use crate::event::Event;

/// Generate .ics content for all events.
///
/// Events whose date isn't YYYY-MM-DD can't be placed on a calendar and are skipped.
pub fn export_ics(events: &[Event]) -> String {
    let mut cal = Calendar::new();

    for event in events {
        let Some(date) = event.parsed_date() else {
            tracing::warn!(id = %event.id, date = %event.date, "skipping event with unparseable date");
            continue;
        };

        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.id);
        ics_event.summary(&event.name);
        ics_event.all_day(date);
        ics_event.add_property("CATEGORIES", event.category.as_str());

        if !event.description.is_empty() {
            ics_event.description(&event.description);
        }

        cal.push(ics_event.done());
    }

    strip_ics_bloat(&cal.done().to_string())
}

/// Replace the icalendar crate's PRODID and drop CALSCALE:GREGORIAN (the default).
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:CALSTORE\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
