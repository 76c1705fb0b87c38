#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("{field} is required")]
    Validation { field: &'static str },

    #[error("an event with id {0} already exists")]
    DuplicateId(String),

    #[error("student {student_id} is already registered for event {event_id}")]
    DuplicateRegistration {
        event_id: String,
        student_id: String,
    },

    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Trimmed copy of `value`, or a validation error naming `field` when nothing is left.
pub fn required(field: &'static str, value: &str) -> Result<String, DecideError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DecideError::Validation { field });
    }
    Ok(trimmed.to_string())
}
