// src/config/mod.rs

/// Wildcard bind host used when no host argument is given.
pub const DEFAULT_HOST: &str = "::";

/// Port used when no port argument is given.
pub const DEFAULT_PORT: &str = "8009";

/// Pending-connection queue depth passed to listen().
pub const BACKLOG: i32 = 10;

/// The endpoint the process was asked to listen on. Built once from argv,
/// immutable afterwards. The port is kept as text so that anything the
/// resolver cannot interpret surfaces as a resolution error rather than an
/// argument-parsing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindTarget {
    pub host: String,
    pub port: String,
}

impl BindTarget {
    /// argv[1] = host, argv[2] = port; anything missing falls back to the
    /// defaults, anything extra is ignored.
    pub fn from_args<I>(mut args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        let host = args.next().unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = args.next().unwrap_or_else(|| DEFAULT_PORT.to_string());
        Self { host, port }
    }
}

impl Default for BindTarget {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
        }
    }
}
