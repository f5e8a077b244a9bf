//! TCP transport for the HTTP adapters

use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tracing::info;

/// Start the HTTP server on TCP, running until `shutdown` resolves
pub async fn serve_on_tcp(
    addr: SocketAddr,
    app: Router,
    shutdown: impl Future<Output = ()>,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("HTTP server listening on TCP {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
