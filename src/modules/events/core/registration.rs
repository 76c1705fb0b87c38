use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub event_id: String,
    pub student_id: String,
    pub name: String,
    pub class_name: String,
    pub section: String,
    pub dept: String,
    pub college: String,
    #[serde(serialize_with = "serialize_millis")]
    pub when: DateTime<Utc>,
}

/// Always exactly three fractional digits, e.g. `2025-10-01T09:30:00.000Z`.
fn serialize_millis<S: Serializer>(when: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&when.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl Registration {
    /// `"<name> (<studentId>) - <className> <section>, <dept>, <college>"`
    pub fn participant_line(&self) -> String {
        format!(
            "{} ({}) - {} {}, {}, {}",
            self.name, self.student_id, self.class_name, self.section, self.dept, self.college
        )
    }
}
