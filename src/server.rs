use log::{info, warn};
use tokio::net::TcpListener;

use crate::api::create_router;
use crate::config::Config;
use crate::errors::Result;
use crate::service::SongCatalogService;

/// Loads the catalog once and serves it until Ctrl+C.
pub async fn serve(config: Config) -> Result<()> {
    info!("Loading {} ...", config.catalog.describe());
    let catalog = config.catalog.load()?;
    info!("Catalog ready with {} stations", catalog.len());

    let app = create_router(SongCatalogService::new(catalog));
    let listener = TcpListener::bind(config.addr).await?;
    let addr = listener.local_addr()?;
    info!("Listening on http://{addr}");
    info!("Example: http://{addr}/song?station=0");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested ..."),
        Err(e) => warn!("Failed to listen for Ctrl+C: {e}"),
    }
}
