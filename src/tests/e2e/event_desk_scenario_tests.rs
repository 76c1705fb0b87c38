// End to end scenarios through the assembled router.
//
// - Admin logs in, adds an event, a student registers, a repeat registration is refused.
// - A session flag persisted by one process opens the admin routes for the next one.
// - A corrupt events blob is replaced by the seed set on first read.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::events::adapters::outbound::record_store::{EVENTS_KEY, RecordStore};
use crate::modules::events::adapters::outbound::text_renderer::TextRosterRenderer;
use crate::modules::events::core::queries::is_duplicate;
use crate::modules::events::core::session::Session;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shared::infrastructure::key_value_store::file::FileKeyValueStore;
use crate::shell::http::app;
use crate::shell::state::AppState;
use crate::tests::fixtures::diagnostics::RecordingDiagnostics;
use crate::tests::fixtures::state::make_test_state;

async fn call(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

const STUDENT: &str = r#"{"studentId":"S1","name":"Asha Rao","className":"BSc 2","section":"A","dept":"Physics","college":"City College"}"#;

#[rstest]
#[tokio::test]
async fn it_should_run_the_add_register_and_repeat_scenario() {
    let (fixture, state) = make_test_state(Session::default());
    let router = app(state);

    let (status, _) = call(
        &router,
        json_request(
            "POST",
            "/admin/login",
            r#"{"username":"admin","password":"1234"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = call(&router, get("/stats")).await;
    assert_eq!(stats["totalEvents"], 2);

    let (status, _) = call(
        &router,
        json_request(
            "POST",
            "/admin/events",
            r#"{"id":"E003","name":"Quiz","category":"Technical","date":"2025-12-01","venue":"Hall B","time":"14:00"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, stats) = call(&router, get("/stats")).await;
    assert_eq!(stats["totalEvents"], 3);

    let (status, _) = call(
        &router,
        json_request("POST", "/events/E003/registrations", STUDENT),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, stats) = call(&router, get("/stats")).await;
    assert_eq!(stats["totalRegistrations"], 1);
    let registrations = fixture.store.load_registrations().await.unwrap();
    assert!(is_duplicate(&registrations, "E003", "S1"));

    let (status, body) = call(
        &router,
        json_request("POST", "/events/E003/registrations", STUDENT),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["error"],
        "student S1 is already registered for event E003"
    );
    let (_, stats) = call(&router, get("/stats")).await;
    assert_eq!(stats["totalRegistrations"], 1);

    let (status, participants) = call(&router, get("/admin/events/E003/participants")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        participants["lines"][0],
        "Asha Rao (S1) - BSc 2 A, Physics, City College"
    );

    let (status, _) = call(
        &router,
        Request::delete("/admin/events/E003")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, stats) = call(&router, get("/stats")).await;
    assert_eq!(stats["totalEvents"], 2);
    assert_eq!(stats["totalRegistrations"], 1);
}

#[rstest]
#[tokio::test]
async fn it_should_restore_the_admin_view_from_a_persisted_session() {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let dir = std::env::temp_dir().join(format!(
        "event_desk_session_{}_{nanos}",
        std::process::id()
    ));

    {
        let kv = Arc::new(FileKeyValueStore::open(&dir).await.unwrap());
        let store = Arc::new(RecordStore::new(kv));
        let session = store.load_session().await.unwrap();
        let router = app(AppState::new(store, Arc::new(TextRosterRenderer), session));
        let (status, _) = call(&router, get("/admin/events")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let (status, _) = call(
            &router,
            json_request(
                "POST",
                "/admin/login",
                r#"{"username":"admin","password":"1234"}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let kv = Arc::new(FileKeyValueStore::open(&dir).await.unwrap());
    let store = Arc::new(RecordStore::new(kv));
    let session = store.load_session().await.unwrap();
    assert!(session.admin_logged_in);
    let router = app(AppState::new(store, Arc::new(TextRosterRenderer), session));
    let (status, events) = call(&router, get("/admin/events")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(events.as_array().map(Vec::len), Some(2));

    let _ = std::fs::remove_dir_all(dir);
}

#[rstest]
#[tokio::test]
async fn it_should_serve_the_seed_when_the_events_blob_is_corrupt() {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let dir = std::env::temp_dir().join(format!(
        "event_desk_corrupt_{}_{nanos}",
        std::process::id()
    ));
    let kv = Arc::new(FileKeyValueStore::open(&dir).await.unwrap());
    kv.set(EVENTS_KEY, "<<not json>>").await.unwrap();

    let diagnostics = Arc::new(RecordingDiagnostics::new());
    let store = Arc::new(RecordStore::with_diagnostics(
        kv.clone(),
        diagnostics.clone(),
    ));
    let router = app(AppState::new(
        store,
        Arc::new(TextRosterRenderer),
        Session::default(),
    ));

    let (status, events) = call(&router, get("/events")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(events[0]["id"], "E001");
    assert_eq!(events[1]["id"], "E002");
    assert_eq!(diagnostics.recorded().len(), 1);

    let persisted = kv.get(EVENTS_KEY).await.unwrap().unwrap();
    assert!(persisted.starts_with(r#"[{"id":"E001""#));

    let _ = std::fs::remove_dir_all(dir);
}
