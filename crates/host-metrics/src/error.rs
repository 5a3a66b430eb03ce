// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for metric extraction.

/// Errors that can occur when extracting a metric from a procfs source.
///
/// Every variant names the source it came from, so the rendered message is
/// self-explanatory when embedded in the status page.
#[derive(Debug, thiserror::Error)]
pub enum MetricError {
    /// The source could not be opened (missing, permission denied, ...).
    #[error("cannot open {path}: {source}")]
    SourceUnavailable {
        path: String,
        source: std::io::Error,
    },

    /// An I/O error occurred while reading lines from an open source.
    #[error("failed to read {path}: {source}")]
    ReadFailure {
        path: String,
        source: std::io::Error,
    },

    /// The source content does not have the expected structure.
    #[error("malformed data in {path}: {detail}")]
    MalformedData { path: String, detail: String },

    /// A field that must be numeric could not be parsed.
    #[error("failed to parse value from {path}: {detail}")]
    ParseFailure { path: String, detail: String },

    /// The total memory field is zero, so no percentage can be formed.
    #[error("total memory reported as 0 kB in {path}")]
    DivisionError { path: String },
}

impl MetricError {
    pub(crate) fn malformed(path: &std::path::Path, detail: impl Into<String>) -> Self {
        Self::MalformedData {
            path: path.display().to_string(),
            detail: detail.into(),
        }
    }

    pub(crate) fn parse(path: &std::path::Path, detail: impl Into<String>) -> Self {
        Self::ParseFailure {
            path: path.display().to_string(),
            detail: detail.into(),
        }
    }
}
