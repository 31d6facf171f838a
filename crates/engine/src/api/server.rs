use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;

use super::routes::create_router;
use crate::store::Store;

pub async fn start_server(store: Arc<Store>, shutdown_rx: watch::Receiver<bool>) -> Result<()> {
    let app = create_router().with_state(store);

    let addr = std::env::var("SWITCHBOARD_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("🚀 Switchboard API server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_rx))
        .await?;

    Ok(())
}

async fn shutdown_signal(mut shutdown_rx: watch::Receiver<bool>) {
    // Wait for shutdown signal
    while !*shutdown_rx.borrow() {
        if shutdown_rx.changed().await.is_err() {
            break;
        }
    }
    println!("Shutting down API server...");
}
