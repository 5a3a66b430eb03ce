// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # status-server
//!
//! Serves the `host-metrics` report as a preformatted status page.
//!
//! - A **status listener** answers every request with `200 OK` and a page
//!   holding uptime, load average and memory utilisation. A metric that
//!   fails to read shows its error text instead; the page is still served.
//! - An optional **redirect listener** answers every plaintext request with
//!   `302 Found` pointing at a fixed HTTPS origin.
//!
//! Metrics are re-read on every request. Nothing is cached and no state is
//! shared between requests besides the immutable [`host_metrics::MetricReader`].

mod config;
mod error;
pub mod render;
pub mod routes;
mod server;

pub use config::{ServerConfig, TlsConfig};
pub use error::ServerError;
pub use server::serve;
