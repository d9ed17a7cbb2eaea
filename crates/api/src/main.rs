use std::sync::Arc;

use passgate_api::{app, config::Config};
use passgate_store::MemoryStore;

#[tokio::main]
async fn main() {
    passgate_observability::init();

    let config = Config::from_env();

    // In-memory store for local development; production deployments wire an
    // external CredentialStore implementation here.
    let store = Arc::new(MemoryStore::new());
    let router = app::build_app(&config, store);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {e}", config.bind_addr));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, router).await.unwrap();
}
