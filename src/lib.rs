pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export logic types
pub use logic::{Assigned, DomainLookup, OpError, Registered};

// Export all model types
pub use model::*;

// Export store types
pub use store::{Collection, CollectionBacking, CollectionStore, FsBacking, Outcome, StoreError};

// Function for integration testing
pub async fn run_server() -> anyhow::Result<()> {
    use axum::serve;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with INFO level only (suppress DEBUG logs)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    // Load configuration
    let config = crate::config::AppConfig::load()?;

    // Open the collection data directory
    let backing = crate::store::FsBacking::new(&config.storage.data_dir)?;
    let store = Arc::new(crate::store::CollectionStore::new(backing));

    // Create router with state
    let app = crate::api::routes::create_router().with_state(store);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;

    serve(listener, app).await?;

    Ok(())
}
