// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `hoststat status` command: render the page once to stdout.
//!
//! Reads the same sources the server would, so it doubles as a quick
//! check of a `[sources]` configuration.

use host_metrics::MetricReader;
use status_server::{render, ServerConfig};

pub fn execute(config: ServerConfig, path: &str) -> anyhow::Result<()> {
    let reader = MetricReader::from_files(config.sources);
    let report = reader.report();
    for (metric, err) in report.failures() {
        tracing::warn!(metric, error = %err, "metric extraction failed");
    }

    print!("{}", render::render_text(path, &report));
    Ok(())
}
