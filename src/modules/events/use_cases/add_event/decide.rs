// Pure decision for adding an event.
//
// Responsibilities
// - Every field must be non-empty after trimming; the first empty one is reported.
// - The id must not already be present in the collection.
// - Never perform input or output.

use crate::modules::events::core::errors::{DecideError, required};
use crate::modules::events::core::event::Event;
use crate::modules::events::core::queries::find_event;
use crate::modules::events::use_cases::add_event::command::AddEvent;

pub fn decide_add_event(events: &[Event], command: AddEvent) -> Result<Event, DecideError> {
    let event = Event {
        id: required("id", &command.id)?,
        name: required("name", &command.name)?,
        category: required("category", &command.category)?,
        date: required("date", &command.date)?,
        venue: required("venue", &command.venue)?,
        time: required("time", &command.time)?,
    };
    if find_event(events, &event.id).is_some() {
        return Err(DecideError::DuplicateId(event.id));
    }
    Ok(event)
}
