// src/main.rs
use anyhow::Result;
use tracing::info;

use tcp_sink::config::BindTarget;
use tcp_sink::server;

// Current-thread runtime: the program is one sequential flow,
// nothing to parallelise.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing; everything goes to stderr, stdout stays unused.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tcp_sink=info".parse()?),
        )
        .init();

    let target = BindTarget::from_args(std::env::args().skip(1));

    let listener = server::bind_first(&target).await?;
    info!("listening on {}", listener.local_addr()?);

    server::serve(listener).await
}
