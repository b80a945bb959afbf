//! notify-relay entry point.
//!
//! Subscribes to the configured PostgreSQL notification channel and
//! relays payloads to the HTTP sink until interrupted. Exits non-zero if
//! the subscription is lost, leaving the restart decision to the
//! supervisor.

use tracing_subscriber::EnvFilter;

use notify_relay::config::RelayConfig;
use notify_relay::service::Relay;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = RelayConfig::from_env()?;
    tracing::info!(
        channel = %config.channel,
        sink = %config.sink_url,
        "starting notify-relay"
    );

    let handle = Relay::start(config).await?;

    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            match signal {
                Ok(()) => tracing::info!("shutdown signal received"),
                Err(e) => {
                    tracing::error!(error = %e, "failed to listen for shutdown signal; stopping");
                }
            }
        }
        () = handle.closed() => {
            tracing::warn!("relay stopped on its own");
        }
    }

    handle.stop().await?;
    tracing::info!("notify-relay stopped");
    Ok(())
}
