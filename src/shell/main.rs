use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use event_desk::modules::events::adapters::outbound::record_store::RecordStore;
use event_desk::modules::events::adapters::outbound::text_renderer::TextRosterRenderer;
use event_desk::shared::infrastructure::key_value_store::KeyValueStore;
use event_desk::shared::infrastructure::key_value_store::file::FileKeyValueStore;
use event_desk::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use event_desk::shell::config::{AppConfig, StoreKind};
use event_desk::shell::http::app;
use event_desk::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let kv: Arc<dyn KeyValueStore> = match config.store {
        StoreKind::File => Arc::new(FileKeyValueStore::open(&config.data_dir).await?),
        StoreKind::Memory => Arc::new(InMemoryKeyValueStore::new()),
    };
    let store = Arc::new(RecordStore::new(kv));

    let session = store.load_session().await?;
    info!(
        admin_logged_in = session.admin_logged_in,
        store = ?config.store,
        data_dir = %config.data_dir.display(),
        "session restored"
    );

    let state = AppState::new(store, Arc::new(TextRosterRenderer), session);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("REST endpoints: http://{}/events", config.addr);
    info!("GraphQL endpoint: http://{}/gql", config.addr);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
