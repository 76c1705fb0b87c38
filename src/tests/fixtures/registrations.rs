use crate::modules::events::core::registration::Registration;
use crate::modules::events::use_cases::register_student::command::{
    RegisterStudent, StudentDetails,
};
use chrono::{DateTime, TimeZone, Utc};

pub fn fixed_when() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 9, 30, 0)
        .single()
        .unwrap_or_default()
}

pub struct RegistrationBuilder {
    inner: Registration,
}

impl Default for RegistrationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegistrationBuilder {
    pub fn new() -> Self {
        Self {
            inner: Registration {
                event_id: "E003".into(),
                student_id: "S1".into(),
                name: "Asha Rao".into(),
                class_name: "BSc 2".into(),
                section: "A".into(),
                dept: "Physics".into(),
                college: "City College".into(),
                when: fixed_when(),
            },
        }
    }

    pub fn event_id(mut self, v: impl Into<String>) -> Self {
        self.inner.event_id = v.into();
        self
    }

    pub fn student_id(mut self, v: impl Into<String>) -> Self {
        self.inner.student_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn class_name(mut self, v: impl Into<String>) -> Self {
        self.inner.class_name = v.into();
        self
    }

    pub fn section(mut self, v: impl Into<String>) -> Self {
        self.inner.section = v.into();
        self
    }

    pub fn dept(mut self, v: impl Into<String>) -> Self {
        self.inner.dept = v.into();
        self
    }

    pub fn college(mut self, v: impl Into<String>) -> Self {
        self.inner.college = v.into();
        self
    }

    pub fn when(mut self, v: DateTime<Utc>) -> Self {
        self.inner.when = v;
        self
    }

    pub fn build(self) -> Registration {
        self.inner
    }

    pub fn build_command(self) -> RegisterStudent {
        let Registration {
            event_id,
            student_id,
            name,
            class_name,
            section,
            dept,
            college,
            when,
        } = self.inner;
        RegisterStudent {
            event_id,
            student_id,
            details: StudentDetails {
                name,
                class_name,
                section,
                dept,
                college,
            },
            when,
        }
    }
}
