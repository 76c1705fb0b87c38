// Derived read views over the two collections.
//
// Everything here is a pure function of the slices handed in; nothing mutates or persists.

use crate::modules::events::core::event::Event;
use crate::modules::events::core::registration::Registration;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

pub fn find_event<'a>(events: &'a [Event], id: &str) -> Option<&'a Event> {
    events.iter().find(|e| e.id == id)
}

pub fn registrations_for<'a>(
    registrations: &'a [Registration],
    event_id: &str,
) -> Vec<&'a Registration> {
    registrations
        .iter()
        .filter(|r| r.event_id == event_id)
        .collect()
}

pub fn is_duplicate(registrations: &[Registration], event_id: &str, student_id: &str) -> bool {
    registrations
        .iter()
        .any(|r| r.event_id == event_id && r.student_id == student_id)
}

pub fn count_events(events: &[Event]) -> usize {
    events.len()
}

pub fn count_registrations(registrations: &[Registration]) -> usize {
    registrations.len()
}

/// Date-only values resolve to midnight UTC. Values that do not parse are never upcoming.
pub fn event_starts_at(date: &str) -> Option<DateTime<Utc>> {
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    DateTime::parse_from_rfc3339(date)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn count_upcoming(events: &[Event], now: DateTime<Utc>) -> usize {
    events
        .iter()
        .filter(|e| event_starts_at(&e.date).is_some_and(|starts| starts >= now))
        .count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub total_events: usize,
    pub total_registrations: usize,
    pub upcoming_events: usize,
}

impl Dashboard {
    pub fn compute(events: &[Event], registrations: &[Registration], now: DateTime<Utc>) -> Self {
        Self {
            total_events: count_events(events),
            total_registrations: count_registrations(registrations),
            upcoming_events: count_upcoming(events, now),
        }
    }
}
