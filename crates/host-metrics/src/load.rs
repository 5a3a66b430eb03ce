// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Load average via `/proc/loadavg`.
//!
//! Format: `"0.35 0.28 0.22 1/234 5678"`. The line is reported verbatim;
//! none of its fields are interpreted.

use crate::{LineSource, MetricError};
use std::fmt;
use std::path::Path;

/// The raw load-average line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadAverage(String);

impl LoadAverage {
    /// Wraps an already-read load-average line.
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    /// Reads the load-average source through `source`.
    ///
    /// A source with no lines at all is reported as
    /// [`MetricError::MalformedData`]; an empty first line is passed
    /// through as-is.
    pub fn read_from(source: &impl LineSource, path: &Path) -> Result<Self, MetricError> {
        source
            .read_lines(path, 1)?
            .into_iter()
            .next()
            .map(Self)
            .ok_or_else(|| MetricError::malformed(path, "source is empty"))
    }

    /// Returns the line exactly as read.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoadAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
