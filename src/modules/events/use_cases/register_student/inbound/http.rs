use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::events::use_cases::errors::error_response;
use crate::modules::events::use_cases::register_student::command::{
    RegisterStudent, StudentDetails,
};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStudentBody {
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub dept: String,
    #[serde(default)]
    pub college: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<RegisterStudentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.body_text()),
    };

    let command = RegisterStudent {
        event_id,
        student_id: body.student_id,
        details: StudentDetails {
            name: body.name,
            class_name: body.class_name,
            section: body.section,
            dept: body.dept,
            college: body.college,
        },
        when: Utc::now(),
    };

    match state.register_student.handle(command).await {
        Ok(registration) => (StatusCode::CREATED, Json(registration)).into_response(),
        Err(e) => e.into_response(),
    }
}
