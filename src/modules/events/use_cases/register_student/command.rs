// Student intent to sign up for one event.
//
// - `when` is stamped by the inbound adapter so the decider stays free of clocks.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDetails {
    pub name: String,
    pub class_name: String,
    pub section: String,
    pub dept: String,
    pub college: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterStudent {
    pub event_id: String,
    pub student_id: String,
    pub details: StudentDetails,
    pub when: DateTime<Utc>,
}
