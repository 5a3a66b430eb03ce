// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Server configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! listen = "0.0.0.0:443"
//! redirect_listen = "0.0.0.0:80"
//! redirect_to = "https://status.example.org/"
//! shutdown_grace_secs = 10
//!
//! [tls]
//! cert_path = "/etc/letsencrypt/live/status.example.org/fullchain.pem"
//! key_path = "/etc/letsencrypt/live/status.example.org/privkey.pem"
//!
//! [sources]
//! uptime = "/proc/uptime"
//! loadavg = "/proc/loadavg"
//! meminfo = "/proc/meminfo"
//! ```
//!
//! Every key is optional. Without `[tls]` the status page is served over
//! plaintext; without `redirect_listen` no redirect listener is started.

use crate::ServerError;
use host_metrics::SourcePaths;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for the status and redirect listeners.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address of the status-page listener.
    pub listen: SocketAddr,
    /// Address of the plaintext redirect listener, if any.
    pub redirect_listen: Option<SocketAddr>,
    /// Absolute URL every request to the redirect listener is sent to.
    pub redirect_to: String,
    /// How long in-flight requests may take to finish on shutdown.
    pub shutdown_grace_secs: u64,
    /// Certificate chain and key for the status listener.
    pub tls: Option<TlsConfig>,
    /// Where the metric sources live.
    pub sources: SourcePaths,
}

/// PEM files for the TLS listener.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TlsConfig {
    /// Full certificate chain, leaf first.
    pub cert_path: PathBuf,
    /// Private key matching the leaf certificate.
    pub key_path: PathBuf,
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ServerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ServerError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ServerError> {
        toml::from_str(toml_str)
            .map_err(|e| ServerError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ServerError> {
        toml::to_string_pretty(self)
            .map_err(|e| ServerError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Checks the settings that cannot be expressed in the types.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.redirect_listen.is_some()
            && !(self.redirect_to.starts_with("https://") || self.redirect_to.starts_with("http://"))
        {
            return Err(ServerError::ConfigError(format!(
                "redirect_to must be an absolute http(s) URL, got '{}'",
                self.redirect_to
            )));
        }

        if self.redirect_listen == Some(self.listen) {
            return Err(ServerError::ConfigError(format!(
                "listen and redirect_listen are both {}",
                self.listen
            )));
        }

        Ok(())
    }

    /// Returns the shutdown grace period.
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 8080)),
            redirect_listen: None,
            redirect_to: "https://localhost/".to_string(),
            shutdown_grace_secs: 10,
            tls: None,
            sources: SourcePaths::default(),
        }
    }
}
