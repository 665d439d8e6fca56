// ────────────────────────────────
// src/server/listener.rs
// Walks the resolved candidates, keeping the first one that makes it all
// the way through socket/reuse/bind/listen.
// ────────────────────────────────
use std::net::SocketAddr;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::{BindTarget, BACKLOG};
use crate::resolver::{self, ResolveError};

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("no bindable address for {host}:{port} ({tried} candidate(s) tried)")]
    Exhausted {
        host: String,
        port: String,
        tried: usize,
    },
}

/// Resolve the target and bind the first candidate that works.
///
/// A failure on one candidate (socket, setsockopt, bind, or listen) is
/// logged and the next candidate is tried; the socket closes on drop, so
/// no partially set-up descriptor outlives its attempt. Only resolution
/// failure or running out of candidates is fatal.
pub async fn bind_first(target: &BindTarget) -> Result<TcpListener, BindError> {
    let candidates = resolver::resolve_candidates(target).await?;
    let tried = candidates.len();

    for addr in candidates {
        info!("Trying {}", resolver::format_endpoint(&addr));
        match listen_on(addr) {
            Ok(listener) => return Ok(listener),
            Err(err) => warn!("{} not bindable: {}", resolver::format_endpoint(&addr), err),
        }
    }

    Err(BindError::Exhausted {
        host: target.host.clone(),
        port: target.port.clone(),
        tried,
    })
}

/// One full candidate attempt: socket(), SO_REUSEADDR, bind(), then
/// listen(BACKLOG), handing the descriptor to tokio at the end. Must run
/// inside a runtime (`from_std` registers with the reactor).
fn listen_on(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    if addr.is_ipv6() {
        // Dual-stack (v4-mapped) where the platform allows it; some
        // platforms pin IPV6_V6ONLY and that is not worth a candidate.
        if let Err(err) = socket.set_only_v6(false) {
            warn!("IPV6_V6ONLY could not be cleared: {}", err);
        }
    }
    socket.bind(&addr.into())?;
    socket.listen(BACKLOG)?;
    socket.set_nonblocking(true)?;
    TcpListener::from_std(socket.into())
}
