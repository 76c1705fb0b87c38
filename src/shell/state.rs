use crate::modules::events::adapters::outbound::record_store::RecordStore;
use crate::modules::events::core::session::Session;
use crate::modules::events::use_cases::add_event::handler::AddEventHandler;
use crate::modules::events::use_cases::admin_login::handler::AdminLoginHandler;
use crate::modules::events::use_cases::dashboard_stats::handler::DashboardStatsHandler;
use crate::modules::events::use_cases::export_roster::handler::ExportRosterHandler;
use crate::modules::events::use_cases::export_roster::renderer_port::RosterRenderer;
use crate::modules::events::use_cases::list_events::handler::ListEventsHandler;
use crate::modules::events::use_cases::register_student::handler::RegisterStudentHandler;
use crate::modules::events::use_cases::remove_event::handler::RemoveEventHandler;
use crate::modules::events::use_cases::view_participants::handler::ViewParticipantsHandler;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub list_events: Arc<ListEventsHandler>,
    pub add_event: Arc<AddEventHandler>,
    pub remove_event: Arc<RemoveEventHandler>,
    pub register_student: Arc<RegisterStudentHandler>,
    pub view_participants: Arc<ViewParticipantsHandler>,
    pub export_roster: Arc<ExportRosterHandler>,
    pub dashboard_stats: Arc<DashboardStatsHandler>,
    pub admin_login: Arc<AdminLoginHandler>,
}

impl AppState {
    /// `session` is the flag restored at startup; the presentation layer never reads storage
    /// for it afterwards.
    pub fn new(
        store: Arc<RecordStore>,
        renderer: Arc<dyn RosterRenderer>,
        session: Session,
    ) -> Self {
        let session = Arc::new(RwLock::new(session));
        Self {
            list_events: Arc::new(ListEventsHandler::new(store.clone())),
            add_event: Arc::new(AddEventHandler::new(store.clone())),
            remove_event: Arc::new(RemoveEventHandler::new(store.clone())),
            register_student: Arc::new(RegisterStudentHandler::new(store.clone())),
            view_participants: Arc::new(ViewParticipantsHandler::new(store.clone())),
            export_roster: Arc::new(ExportRosterHandler::new(store.clone(), renderer)),
            dashboard_stats: Arc::new(DashboardStatsHandler::new(store.clone())),
            admin_login: Arc::new(AdminLoginHandler::new(store, session.clone())),
            session,
        }
    }

    pub async fn is_admin(&self) -> bool {
        self.session.read().await.admin_logged_in
    }
}
