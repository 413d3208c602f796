use std::time::Duration;

use anyhow::Context;
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info};

use crate::http::connection::Connection;
use crate::server::ServerContext;

const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

pub async fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))
}

/// Binds `addr` and serves until the process is killed.
pub async fn run(addr: &str, ctx: ServerContext) -> anyhow::Result<()> {
    let listener = bind(addr).await?;
    info!(root = %ctx.root.path().display(), "Listening on {}", listener.local_addr()?);

    serve(listener, ctx).await
}

/// Accepts one client at a time. Each connection is handled to completion
/// before the next accept; failures are logged and never end the loop.
pub async fn serve(listener: TcpListener, ctx: ServerContext) -> anyhow::Result<()> {
    loop {
        let socket = match listener.accept().await {
            Ok((socket, _)) => socket,
            Err(e) => {
                error!("Accept failed: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };

        let peer = peer_label(&socket);
        info!("Client {} connected", peer);

        if let Err(e) = Connection::new(socket, &ctx).run().await {
            error!("Connection error from {}: {:#}", peer, e);
        }
    }
}

fn peer_label(socket: &TcpStream) -> String {
    socket
        .peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}
