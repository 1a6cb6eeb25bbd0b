//! FreezeGuard - IDE performance telemetry collector
//!
//! Main entry point for the HTTP service.

use std::sync::Arc;

use anyhow::Context as _;
use freezeguard_lib::utils::logging::log_process_error;
use freezeguard_lib::{router, AppContext};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file before reading config
    let dotenv = dotenvy::dotenv();

    let config = freezeguard_infra::config::load().context("failed to load configuration")?;
    freezeguard_infra::init_tracing(&config.logging).context("failed to initialise logging")?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(error = %err, "Could not load .env file"),
    }

    let context = match AppContext::new(config) {
        Ok(context) => Arc::new(context),
        Err(err) => {
            log_process_error("startup", &err);
            return Err(err).context("failed to build collector");
        }
    };
    let bind_addr = context.config.server.bind_addr.clone();

    let listener = match TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            let err = freezeguard_domain::FreezeGuardError::from(err);
            log_process_error("bind", &err);
            return Err(err).with_context(|| format!("failed to bind {bind_addr}"));
        }
    };

    info!(
        bind_addr = %listener.local_addr().map_or(bind_addr, |addr| addr.to_string()),
        profile = %context.config.profile,
        ring_capacity = context.collector.recent().capacity(),
        "freezeguard_started"
    );

    axum::serve(listener, router(Arc::clone(&context)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!(total_events = context.collector.recent().total_appended(), "freezeguard_stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl-C");
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
                warn!(error = %err, "Failed to listen for SIGTERM");
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

    info!("shutdown_signal_received");
}
