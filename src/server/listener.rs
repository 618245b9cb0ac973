use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::http::connection::Connection;
use crate::router::Router;

/// Binds the listen address and serves until accept fails.
pub async fn run(listen_addr: &str, router: Arc<Router>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    info!("Listening on {}", listen_addr);

    serve(listener, router).await
}

/// Accept loop over an already-bound listener.
///
/// Each connection is handled on its own task; the framing contract
/// (exact Content-Length body, one response, `Connection: close`) is
/// unchanged by the concurrency. An accept error ends the loop.
pub async fn serve(listener: TcpListener, router: Arc<Router>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;

        let router = Arc::clone(&router);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
