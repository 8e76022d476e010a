use axum::serve;
use era_portal_rust::api::routes::create_router;
use era_portal_rust::config::AppConfig;
use era_portal_rust::store::{CollectionStore, FsBacking};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging
    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new().filter_level(LevelFilter::Info).init();

    println!("Era Portal: student internship record server");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{} data_dir={}",
        config.server.host,
        config.server.port,
        config.storage.data_dir.display()
    );

    let backing = FsBacking::new(&config.storage.data_dir)?;
    let store = Arc::new(CollectionStore::new(backing));

    run_server(create_router().with_state(store), &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Era Portal server running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
