// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the status server.

use std::net::SocketAddr;

/// Errors that can stop the server from starting or keep it from running.
///
/// Metric extraction failures are not here: those are rendered into the
/// page and never fail a request.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// The certificate chain or private key could not be loaded.
    #[error("failed to load TLS material from '{cert}' and '{key}': {source}")]
    TlsError {
        cert: String,
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A listener failed to bind or stopped with an I/O error.
    #[error("{listener} listener on {addr} failed: {source}")]
    ListenerError {
        listener: &'static str,
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// A listener task panicked or was cancelled.
    #[error("listener task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}
