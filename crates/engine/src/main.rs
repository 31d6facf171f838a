use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;

use switchboard_engine::api;
use switchboard_engine::store::Store;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    println!("Starting Switchboard...\n");

    let store = Arc::new(Store::open_default()?);

    // Shutdown channel shared with the API server
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let api_store = store.clone();
    let api_handle = tokio::spawn(async move {
        if let Err(e) = api::start_server(api_store, shutdown_rx).await {
            eprintln!("API server crashed: {e}");
        }
    });

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    println!("\nReceived shutdown signal...");

    let _ = shutdown_tx.send(true);
    let _ = api_handle.await;

    println!("Switchboard shutdown complete.");
    Ok(())
}
