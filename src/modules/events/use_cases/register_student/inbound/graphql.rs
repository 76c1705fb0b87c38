use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{SecondsFormat, Utc};

use crate::modules::events::use_cases::register_student::command::{
    RegisterStudent, StudentDetails,
};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlRegistration {
    pub event_id: String,
    pub student_id: String,
    pub name: String,
    pub class_name: String,
    pub section: String,
    pub dept: String,
    pub college: String,
    pub when: String,
}

#[derive(Default)]
pub struct RegisterStudentMutation;

#[Object]
impl RegisterStudentMutation {
    #[allow(clippy::too_many_arguments)]
    async fn register_student(
        &self,
        context: &Context<'_>,
        event_id: String,
        student_id: String,
        name: String,
        class_name: String,
        section: String,
        dept: String,
        college: String,
    ) -> GqlResult<GqlRegistration> {
        let state = context.data_unchecked::<AppState>();
        let command = RegisterStudent {
            event_id,
            student_id,
            details: StudentDetails {
                name,
                class_name,
                section,
                dept,
                college,
            },
            when: Utc::now(),
        };
        let r = state
            .register_student
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(GqlRegistration {
            when: r.when.to_rfc3339_opts(SecondsFormat::Millis, true),
            event_id: r.event_id,
            student_id: r.student_id,
            name: r.name,
            class_name: r.class_name,
            section: r.section,
            dept: r.dept,
            college: r.college,
        })
    }
}
