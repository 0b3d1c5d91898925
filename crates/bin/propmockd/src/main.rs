//! # propmockd — propmock daemon
//!
//! Composition root that wires the HTTP adapter together and starts the
//! mock server.
//!
//! ## Responsibilities
//! - Install the `tracing` subscriber (`RUST_LOG` overrides the default filter)
//! - Build the axum router
//! - Bind the fixed loopback address and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// The address clients under test are pointed at.
const LISTEN_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000));

/// Filter used when `RUST_LOG` is unset or unparseable.
const DEFAULT_LOG_FILTER: &str = "propmockd=info,propmock_adapter_http_axum=info,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let app = propmock_adapter_http_axum::router::build();

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR)
        .await
        .with_context(|| format!("binding {LISTEN_ADDR}"))?;
    tracing::info!("Mock server listening on http://{}...", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving http")?;

    tracing::info!("Mock server stopped");
    Ok(())
}

/// Resolve once the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_listen_on_loopback_port_3000() {
        assert_eq!(LISTEN_ADDR.to_string(), "127.0.0.1:3000");
        assert!(LISTEN_ADDR.ip().is_loopback());
    }

    #[test]
    fn should_parse_default_log_filter() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
