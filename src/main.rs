//! Server binary: reads config from the environment, opens the store, serves the API.

use axum::extract::Request;
use favorites_api::{app, ensure_tables, AppConfig, AppState, MemoryStore, PgStore, Store, StoreKind};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("favorites_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let store: Arc<dyn Store> = match config.store {
        StoreKind::Postgres => {
            let store = PgStore::connect(&config.database_url, config.max_connections).await?;
            ensure_tables(store.pool()).await?;
            Arc::new(store)
        }
        StoreKind::Memory => {
            tracing::warn!("using the seeded in-memory store; favorites are lost on restart");
            Arc::new(MemoryStore::seeded())
        }
    };
    match config.default_user_id {
        Some(id) => tracing::info!(user_id = id, "requests without X-User-Id act as the default user"),
        None => tracing::info!("no default user; favorite routes require X-User-Id"),
    }

    let state = AppState::new(store, config.default_user_id);
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, axum::ServiceExt::<Request>::into_make_service(app(state))).await?;
    Ok(())
}
