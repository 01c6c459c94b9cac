//! Ferry stats HTTP server binary.
//!
//! Loads configuration, optionally seeds the in-memory repository with a
//! travels fixture, and serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! FERRY_TRAVELS_PATH=data/travels.json cargo run --bin ferry-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `FERRY_TRAVELS_PATH`: Travels fixture stored as the `fixture` dataset
//! - `FERRY_BASE_DATE`: Date of tick 0 (default: 2025-08-15)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use ferry_stats::config::ServerConfig;
use ferry_stats::db::{LocalRepository, TravelRepository};
use ferry_stats::http::{create_router, AppState};
use ferry_stats::io::TravelLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting ferry stats server");

    let config = ServerConfig::load()?;

    let repository = LocalRepository::new();
    if let Some(path) = &config.travels_path {
        let travels = TravelLoader::load_from_file(path)?;
        let count = travels.len();
        let id = repository.store_dataset_impl("fixture", travels);
        info!(
            "Loaded {} travels from {} as dataset {}",
            count,
            path.display(),
            id
        );
    }
    let repository: Arc<dyn TravelRepository> = Arc::new(repository);

    let state = AppState::new(repository, config.base_date);
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;

    info!("Server listening on http://{}", addr);
    info!("Route day 0 is {}", config.base_date);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
