// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # hoststat
//!
//! Minimal host status reporter: uptime, load average and memory
//! utilisation on a single preformatted page.
//!
//! ## Usage
//! ```bash
//! # Serve the status page (TLS + redirect listener, per config file)
//! hoststat --config /etc/hoststat.toml serve
//!
//! # Serve over plaintext on a custom address
//! hoststat serve --listen 0.0.0.0:8080 --no-redirect
//!
//! # Print the page once to stdout
//! hoststat status
//!
//! # Show the effective configuration
//! hoststat --config /etc/hoststat.toml config
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Parser)]
#[command(
    name = "hoststat",
    about = "Serve host uptime, load average and memory utilisation as a status page",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the status page until interrupted.
    Serve {
        /// Address of the status-page listener (overrides the config file).
        #[arg(short, long)]
        listen: Option<SocketAddr>,

        /// Address of the plaintext redirect listener (overrides the config file).
        #[arg(long, conflicts_with = "no_redirect")]
        redirect_listen: Option<SocketAddr>,

        /// Do not start the redirect listener.
        #[arg(long)]
        no_redirect: bool,
    },

    /// Render the status page once to stdout.
    Status {
        /// Request path shown on the first line.
        #[arg(short, long, default_value = "/")]
        path: String,
    },

    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve {
            listen,
            redirect_listen,
            no_redirect,
        } => commands::serve::execute(config, listen, redirect_listen, no_redirect).await,
        Commands::Status { path } => commands::status::execute(config, &path),
        Commands::Config => commands::config::execute(&config),
    }
}
