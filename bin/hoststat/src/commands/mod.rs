// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI plumbing.

pub mod config;
pub mod serve;
pub mod status;

use anyhow::Context;
use status_server::ServerConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count:
/// none → warn, `-v` → info, `-vv` → debug, `-vvv` → trace.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration file if one was given, else the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => {
            let config = ServerConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded configuration");
            Ok(config)
        }
        None => Ok(ServerConfig::default()),
    }
}
