// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Memory utilisation via `/proc/meminfo`.
//!
//! Only the first five lines are read. On every mainline kernel they are,
//! in order:
//!
//! ```text
//! MemTotal:        3963904 kB    k0
//! MemFree:         2028000 kB    k1
//! MemAvailable:    2500000 kB    k2 (unused)
//! Buffers:          500000 kB    k3
//! Cached:           300000 kB    k4
//! ```
//!
//! Fields are taken by position, not by label. Used memory is
//! `k0 - k1 - k3 - k4`, i.e. total minus free, buffers and page cache.

use crate::{LineSource, MetricError};
use std::fmt;
use std::path::Path;

/// Number of leading `/proc/meminfo` lines the computation consumes.
const MEMINFO_LINES: usize = 5;

/// Kibibytes per mebibyte.
const KIB_PER_MIB: i64 = 1024;

/// Memory utilisation derived from the first five `/proc/meminfo` fields.
///
/// `used_mib` and `percent_used` are signed: inconsistent upstream data
/// can make them negative, and they are reported unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    /// Used memory in MiB (truncated toward zero).
    pub used_mib: i64,
    /// Total memory in MiB (truncated toward zero).
    pub total_mib: i64,
    /// `used * 100 / total`, truncated toward zero.
    pub percent_used: i64,
}

impl MemoryUsage {
    /// Reads the memory-info source through `source`.
    pub fn read_from(source: &impl LineSource, path: &Path) -> Result<Self, MetricError> {
        let lines = source.read_lines(path, MEMINFO_LINES)?;
        Self::parse(&lines, path)
    }

    /// Parses the leading `/proc/meminfo` lines.
    pub(crate) fn parse<S: AsRef<str>>(
        lines: &[S],
        source_path: &Path,
    ) -> Result<Self, MetricError> {
        if lines.len() < MEMINFO_LINES {
            return Err(MetricError::malformed(
                source_path,
                format!("expected {MEMINFO_LINES} lines, got {}", lines.len()),
            ));
        }

        let mut kb = [0i64; MEMINFO_LINES];
        for (slot, line) in kb.iter_mut().zip(lines) {
            *slot = parse_kb_line(line.as_ref(), source_path)?;
        }

        Self::from_kb(kb, source_path)
    }

    /// Computes utilisation from the five raw kilobyte counts.
    fn from_kb(kb: [i64; MEMINFO_LINES], source_path: &Path) -> Result<Self, MetricError> {
        let [total, free, _available, buffers, cached] = kb;

        if total == 0 {
            return Err(MetricError::DivisionError {
                path: source_path.display().to_string(),
            });
        }

        let overflow = || MetricError::malformed(source_path, "kB values overflow");
        let used = total
            .checked_sub(free)
            .and_then(|v| v.checked_sub(buffers))
            .and_then(|v| v.checked_sub(cached))
            .ok_or_else(overflow)?;
        let percent_used = used
            .checked_mul(100)
            .and_then(|v| v.checked_div(total))
            .ok_or_else(overflow)?;

        Ok(Self {
            used_mib: used / KIB_PER_MIB,
            total_mib: total / KIB_PER_MIB,
            percent_used,
        })
    }
}

impl fmt::Display for MemoryUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} MiB / {} MiB ({}%)",
            self.used_mib, self.total_mib, self.percent_used
        )
    }
}

/// Parses one `label value unit` line, returning the value in kB.
fn parse_kb_line(line: &str, source_path: &Path) -> Result<i64, MetricError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [_label, value, _unit] = parts.as_slice() else {
        return Err(MetricError::malformed(
            source_path,
            format!("expected 3 fields, got {} in '{line}'", parts.len()),
        ));
    };

    value.parse::<i64>().map_err(|_| {
        MetricError::parse(
            source_path,
            format!("expected integer kB value, got '{value}'"),
        )
    })
}
