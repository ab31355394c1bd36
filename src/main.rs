//! Policy Cache - interactive console
//!
//! Reads commands from stdin and answers on stdout with one JSON line each.
//! Logs, including the `DISCARD: <key>` eviction notices, go to stderr.

use anyhow::Context;
use tokio::io::{self, BufReader};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use policy_cache::console::run_session;
use policy_cache::{Config, SharedCache};

/// Main entry point for the console.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared cache for the configured policy
/// 4. Run the session on stdin/stdout until QUIT, EOF or a shutdown signal
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "policy_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("loading configuration")?;
    info!(
        "Configuration loaded: policy={}, max_items={}",
        config.policy, config.max_items
    );

    let cache = SharedCache::from_config(&config).context("creating cache")?;
    info!("Cache initialized, reading commands from stdin");

    let stdin = BufReader::new(io::stdin());
    let stdout = io::stdout();

    tokio::select! {
        result = run_session(&cache, stdin, stdout) => {
            let handled = result?;
            info!("Session finished after {} commands", handled);
        }
        _ = shutdown_signal() => {}
    }

    let stats = cache.stats().await;
    info!(
        "Final stats: hits={}, misses={}, evictions={}, entries={}",
        stats.hits, stats.misses, stats.evictions, stats.total_entries
    );
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
