// ────────────────────────────────
// src/resolver/mod.rs
// Turns a BindTarget into an ordered list of candidate socket addresses,
// and renders addresses the way they get logged.
// ────────────────────────────────
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use tokio::net::lookup_host;
use tracing::debug;

use crate::config::BindTarget;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("cannot interpret port/service {0:?}")]
    InvalidPort(String),

    #[error("lookup failed for {host}:{port}: {source}")]
    Lookup {
        host: String,
        port: String,
        source: std::io::Error,
    },

    #[error("no addresses resolved for {host}:{port}")]
    Empty { host: String, port: String },
}

/// Resolve the target into candidate addresses, in resolver order.
///
/// Literal IP hosts take a fast path and never touch the system resolver.
/// Returns an error when the lookup fails, yields nothing, or the port is
/// not numeric (the platform resolver behind `lookup_host` does not take
/// service names).
pub async fn resolve_candidates(target: &BindTarget) -> Result<Vec<SocketAddr>, ResolveError> {
    let port: u16 = target
        .port
        .parse()
        .map_err(|_| ResolveError::InvalidPort(target.port.clone()))?;

    if let Ok(ip) = IpAddr::from_str(&target.host) {
        return Ok(vec![SocketAddr::new(ip, port)]);
    }

    let candidates: Vec<SocketAddr> = lookup_host((target.host.as_str(), port))
        .await
        .map_err(|source| ResolveError::Lookup {
            host: target.host.clone(),
            port: target.port.clone(),
            source,
        })?
        .collect();

    debug!("{}:{} resolved to {} candidate(s)", target.host, target.port, candidates.len());

    if candidates.is_empty() {
        return Err(ResolveError::Empty {
            host: target.host.clone(),
            port: target.port.clone(),
        });
    }
    Ok(candidates)
}

/// Numeric "host:port" text for log lines. Hosts whose text contains a
/// colon (IPv6 literals) are bracketed.
pub fn format_endpoint(addr: &SocketAddr) -> String {
    let host = addr.ip().to_string();
    if host.contains(':') {
        format!("[{}]:{}", host, addr.port())
    } else {
        format!("{}:{}", host, addr.port())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn ipv4_endpoints_are_plain() {
        let addr = SocketAddr::new(Ipv4Addr::new(192, 0, 2, 7).into(), 8009);
        assert_eq!(format_endpoint(&addr), "192.0.2.7:8009");
    }

    #[test]
    fn ipv6_endpoints_are_bracketed() {
        let addr = SocketAddr::new(Ipv6Addr::LOCALHOST.into(), 8009);
        assert_eq!(format_endpoint(&addr), "[::1]:8009");
    }

    #[tokio::test]
    async fn literal_host_yields_a_single_candidate() {
        let target = BindTarget {
            host: "::".to_string(),
            port: "8009".to_string(),
        };
        let candidates = resolve_candidates(&target).await.unwrap();
        assert_eq!(candidates, vec![SocketAddr::new(Ipv6Addr::UNSPECIFIED.into(), 8009)]);
    }

    #[tokio::test]
    async fn service_names_are_a_resolution_error() {
        let target = BindTarget {
            host: "::".to_string(),
            port: "discard".to_string(),
        };
        let err = resolve_candidates(&target).await.unwrap_err();
        assert!(matches!(err, ResolveError::InvalidPort(_)));
    }

    proptest! {
        #[test]
        fn ipv4_text_never_contains_brackets(a: u8, b: u8, c: u8, d: u8, port: u16) {
            let addr = SocketAddr::new(Ipv4Addr::new(a, b, c, d).into(), port);
            let text = format_endpoint(&addr);
            prop_assert!(!text.contains('['));
            let suffix = format!(":{port}");
            prop_assert!(text.ends_with(&suffix));
        }

        #[test]
        fn ipv6_text_is_always_bracketed(segments: [u16; 8], port: u16) {
            let ip = Ipv6Addr::from(segments);
            let addr = SocketAddr::new(ip.into(), port);
            let text = format_endpoint(&addr);
            prop_assert!(text.starts_with('['));
            prop_assert!(text.contains("]:"));
        }
    }
}
