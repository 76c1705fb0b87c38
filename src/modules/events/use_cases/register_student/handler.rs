use crate::modules::events::adapters::outbound::record_store::RecordStore;
use crate::modules::events::core::registration::Registration;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::register_student::command::RegisterStudent;
use crate::modules::events::use_cases::register_student::decide::decide_register;
use std::sync::Arc;
use tracing::info;

pub struct RegisterStudentHandler {
    store: Arc<RecordStore>,
}

impl RegisterStudentHandler {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: RegisterStudent) -> Result<Registration, ApplicationError> {
        let _guard = self.store.lock().await;
        let mut registrations = self.store.load_registrations().await?;
        let registration = decide_register(&registrations, command)?;
        registrations.push(registration.clone());
        self.store.save_registrations(&registrations).await?;
        info!(
            event_id = %registration.event_id,
            student_id = %registration.student_id,
            "student registered"
        );
        Ok(registration)
    }
}
