// ────────────────────────────────
// src/server/accept.rs
// ────────────────────────────────
use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use crate::resolver::format_endpoint;

/// Service connections one at a time: wait for readiness, accept, log the
/// peer, close. No bytes are read or written. At most one peer socket is
/// live at any instant; it is dropped before the next wait begins.
///
/// Runs until accept fails. The peer address comes back from `accept()`
/// already resolved and formats infallibly, so a bad peer cannot take the
/// loop down.
pub async fn serve(listener: TcpListener) -> Result<()> {
    loop {
        let (stream, peer) = listener.accept().await.context("accept() failed")?;
        let endpoint = format_endpoint(&peer);
        info!("{} Connected...", endpoint);
        drop(stream);
        info!("{} closed", endpoint);
    }
}
