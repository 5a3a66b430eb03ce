// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Line-oriented access to system-state sources.
//!
//! The extraction operations never touch the filesystem directly; they go
//! through a [`LineSource`]. [`FileSource`] reads real procfs files, while
//! [`MemorySource`] serves fixed text so parsing can be tested without a
//! Linux host.

use crate::MetricError;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Default path of the kernel uptime file.
pub const UPTIME_PATH: &str = "/proc/uptime";
/// Default path of the kernel load-average file.
pub const LOADAVG_PATH: &str = "/proc/loadavg";
/// Default path of the kernel memory info file.
pub const MEMINFO_PATH: &str = "/proc/meminfo";

/// A provider of line-oriented system-state text.
pub trait LineSource {
    /// Reads at most `max_lines` lines from `path`, in order, with line
    /// terminators stripped.
    ///
    /// A source shorter than `max_lines` is not an error: the caller gets
    /// however many lines were available, possibly none.
    fn read_lines(&self, path: &Path, max_lines: usize) -> Result<Vec<String>, MetricError>;
}

impl<T: LineSource + ?Sized> LineSource for &T {
    fn read_lines(&self, path: &Path, max_lines: usize) -> Result<Vec<String>, MetricError> {
        (**self).read_lines(path, max_lines)
    }
}

/// Reads lines from the real filesystem.
///
/// The file handle lives only for the duration of a single call and is
/// closed on every exit path when the reader is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl LineSource for FileSource {
    fn read_lines(&self, path: &Path, max_lines: usize) -> Result<Vec<String>, MetricError> {
        let file = File::open(path).map_err(|e| MetricError::SourceUnavailable {
            path: path.display().to_string(),
            source: e,
        })?;

        let lines = BufReader::new(file)
            .lines()
            .take(max_lines)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| MetricError::ReadFailure {
                path: path.display().to_string(),
                source: e,
            })?;

        tracing::debug!(path = %path.display(), lines = lines.len(), "read source");
        Ok(lines)
    }
}

/// Serves fixed, in-memory content keyed by path.
///
/// Paths that were never inserted behave like a missing file and yield
/// [`MetricError::SourceUnavailable`].
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<PathBuf, String>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the content served for `path`.
    pub fn with(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Adds (or replaces) the content served for `path`.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl LineSource for MemorySource {
    fn read_lines(&self, path: &Path, max_lines: usize) -> Result<Vec<String>, MetricError> {
        let content = self
            .files
            .get(path)
            .ok_or_else(|| MetricError::SourceUnavailable {
                path: path.display().to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })?;

        // `str::lines` strips both "\n" and "\r\n", like `BufRead::lines`.
        Ok(content
            .lines()
            .take(max_lines)
            .map(str::to_owned)
            .collect())
    }
}

/// Locations of the three sources a [`crate::MetricReader`] reads.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SourcePaths {
    /// Seconds since boot, first field of the first line.
    pub uptime: PathBuf,
    /// Raw load-average line.
    pub loadavg: PathBuf,
    /// `label value unit` table; the first five lines are used.
    pub meminfo: PathBuf,
}

impl SourcePaths {
    /// Resolves the three default procfs paths under a different root,
    /// e.g. `/host/proc` when the host's procfs is bind-mounted into a
    /// container.
    pub fn under(proc_root: &Path) -> Self {
        Self {
            uptime: proc_root.join("uptime"),
            loadavg: proc_root.join("loadavg"),
            meminfo: proc_root.join("meminfo"),
        }
    }
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self {
            uptime: PathBuf::from(UPTIME_PATH),
            loadavg: PathBuf::from(LOADAVG_PATH),
            meminfo: PathBuf::from(MEMINFO_PATH),
        }
    }
}
