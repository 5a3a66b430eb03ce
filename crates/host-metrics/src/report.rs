// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Point-in-time host report.
//!
//! A [`HostReport`] carries the outcome of each extraction separately, so a
//! consumer can render whatever succeeded and show the error text for the
//! rest.

use crate::{LoadAverage, MemoryUsage, MetricError, Uptime};

/// The three metric outcomes of a single reading.
#[derive(Debug)]
pub struct HostReport {
    pub uptime: Result<Uptime, MetricError>,
    pub load: Result<LoadAverage, MetricError>,
    pub memory: Result<MemoryUsage, MetricError>,
}

impl HostReport {
    /// Returns `true` if every metric was extracted.
    pub fn is_complete(&self) -> bool {
        self.uptime.is_ok() && self.load.is_ok() && self.memory.is_ok()
    }

    /// Yields `(metric name, error)` for each metric that failed.
    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &MetricError)> {
        [
            ("uptime", self.uptime.as_ref().err()),
            ("load", self.load.as_ref().err()),
            ("mem", self.memory.as_ref().err()),
        ]
        .into_iter()
        .filter_map(|(name, err)| err.map(|e| (name, e)))
    }

    /// Renders one metric outcome as display text: the value on success,
    /// the error message otherwise.
    pub fn display<T: std::fmt::Display>(outcome: &Result<T, MetricError>) -> String {
        match outcome {
            Ok(value) => value.to_string(),
            Err(e) => e.to_string(),
        }
    }

    /// Returns a one-line summary suitable for logging.
    ///
    /// # Example output
    /// ```text
    /// uptime 8m20s, load 0.10 0.20 0.30 1/200 1234, mem 1109 MiB / 3871 MiB (28%)
    /// ```
    pub fn summary(&self) -> String {
        format!(
            "uptime {}, load {}, mem {}",
            Self::display(&self.uptime),
            Self::display(&self.load),
            Self::display(&self.memory),
        )
    }
}
