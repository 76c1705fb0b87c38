// Pure decision for a student registration.
//
// Responsibilities
// - Student id and all five detail fields must be non-empty after trimming.
// - The (event id, student id) pair must not be registered yet.
// - The event id is not checked against the event collection.

use crate::modules::events::core::errors::{DecideError, required};
use crate::modules::events::core::queries::is_duplicate;
use crate::modules::events::core::registration::Registration;
use crate::modules::events::use_cases::register_student::command::RegisterStudent;

pub fn decide_register(
    registrations: &[Registration],
    command: RegisterStudent,
) -> Result<Registration, DecideError> {
    let event_id = command.event_id.trim().to_string();
    let student_id = required("studentId", &command.student_id)?;
    let details = command.details;
    let registration = Registration {
        name: required("name", &details.name)?,
        class_name: required("className", &details.class_name)?,
        section: required("section", &details.section)?,
        dept: required("dept", &details.dept)?,
        college: required("college", &details.college)?,
        event_id,
        student_id,
        when: command.when,
    };
    if is_duplicate(
        registrations,
        &registration.event_id,
        &registration.student_id,
    ) {
        return Err(DecideError::DuplicateRegistration {
            event_id: registration.event_id,
            student_id: registration.student_id,
        });
    }
    Ok(registration)
}
