// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Listener lifecycle.
//!
//! [`serve`] starts the status listener (TLS when configured) and the
//! optional plaintext redirect listener, then waits until Ctrl-C or
//! SIGTERM. Both listeners share one [`Handle`], so shutdown is
//! coordinated: in-flight requests get the configured grace period.
//!
//! If either listener fails, the other is stopped and the error returned.

use crate::{routes, ServerConfig, ServerError};
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use host_metrics::MetricReader;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Runs the configured listeners until a shutdown signal arrives.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;

    let reader = Arc::new(MetricReader::from_files(config.sources.clone()));
    let handle = Handle::new();
    let mut listeners = JoinSet::new();

    let status_app = routes::status_router(reader);
    match &config.tls {
        Some(tls) => {
            let rustls = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
                .await
                .map_err(|e| ServerError::TlsError {
                    cert: tls.cert_path.display().to_string(),
                    key: tls.key_path.display().to_string(),
                    source: e,
                })?;
            tracing::info!(addr = %config.listen, "serving status page over TLS");
            listeners.spawn(serve_tls(config.listen, rustls, status_app, handle.clone()));
        }
        None => {
            tracing::warn!(addr = %config.listen, "no [tls] configured, serving status page over plaintext");
            listeners.spawn(serve_plain("status", config.listen, status_app, handle.clone()));
        }
    }

    if let Some(addr) = config.redirect_listen {
        let redirect_app = routes::redirect_router(&config.redirect_to)?;
        tracing::info!(%addr, to = %config.redirect_to, "redirecting plaintext traffic");
        listeners.spawn(serve_plain("redirect", addr, redirect_app, handle.clone()));
    }

    let signal = tokio::spawn(shutdown_on_signal(handle.clone(), config.shutdown_grace()));

    let mut outcome = Ok(());
    while let Some(joined) = listeners.join_next().await {
        if let Err(e) = joined.map_err(ServerError::from).and_then(|r| r) {
            tracing::error!(error = %e, "listener stopped, shutting down");
            handle.shutdown();
            outcome = Err(e);
            break;
        }
    }
    listeners.shutdown().await;
    signal.abort();

    tracing::info!("server stopped");
    outcome
}

async fn serve_plain(
    listener: &'static str,
    addr: SocketAddr,
    app: Router,
    handle: Handle,
) -> Result<(), ServerError> {
    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|source| ServerError::ListenerError {
            listener,
            addr,
            source,
        })
}

async fn serve_tls(
    addr: SocketAddr,
    rustls: RustlsConfig,
    app: Router,
    handle: Handle,
) -> Result<(), ServerError> {
    axum_server::bind_rustls(addr, rustls)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|source| ServerError::ListenerError {
            listener: "status",
            addr,
            source,
        })
}

async fn shutdown_on_signal(handle: Handle, grace: std::time::Duration) {
    wait_for_signal().await;
    tracing::info!(grace_secs = grace.as_secs(), "shutdown signal received");
    handle.graceful_shutdown(Some(grace));
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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
}
