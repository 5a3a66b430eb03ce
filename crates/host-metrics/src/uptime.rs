// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! System uptime via `/proc/uptime`.
//!
//! The file holds a single line with two floating-point fields: seconds
//! since boot and cumulative idle seconds across all cores, e.g.
//! `"12345.67 45678.90"`. Only the first field is used, truncated to whole
//! seconds.

use crate::{LineSource, MetricError};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Time since boot, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Uptime {
    seconds: u64,
}

impl Uptime {
    /// Creates an uptime from a whole number of seconds.
    pub fn from_secs(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Returns the uptime in whole seconds.
    pub fn as_secs(&self) -> u64 {
        self.seconds
    }

    /// Returns the uptime as a [`Duration`].
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.seconds)
    }

    /// Reads the uptime source through `source`.
    pub fn read_from(source: &impl LineSource, path: &Path) -> Result<Self, MetricError> {
        let lines = source.read_lines(path, 1)?;
        let line = lines
            .first()
            .ok_or_else(|| MetricError::malformed(path, "source is empty"))?;
        Self::parse(line, path)
    }

    /// Parses one `/proc/uptime` line.
    pub(crate) fn parse(line: &str, source_path: &Path) -> Result<Self, MetricError> {
        let first = line
            .split_whitespace()
            .next()
            .ok_or_else(|| MetricError::malformed(source_path, "no fields on uptime line"))?;

        let seconds: f64 = first.parse().map_err(|_| {
            MetricError::parse(
                source_path,
                format!("expected floating-point seconds, got '{first}'"),
            )
        })?;

        if !seconds.is_finite() || seconds < 0.0 {
            return Err(MetricError::parse(
                source_path,
                format!("uptime must be a finite, non-negative number, got '{first}'"),
            ));
        }

        // `as` saturates, so absurdly large values clamp to u64::MAX.
        Ok(Self::from_secs(seconds.trunc() as u64))
    }
}

/// Renders compactly as hours, minutes and seconds: `0s`, `45s`, `8m20s`,
/// `1h0m5s`, `27h46m40s`. Hours are never folded into days.
impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.seconds / 3600;
        let minutes = (self.seconds % 3600) / 60;
        let seconds = self.seconds % 60;

        if hours > 0 {
            write!(f, "{hours}h{minutes}m{seconds}s")
        } else if minutes > 0 {
            write!(f, "{minutes}m{seconds}s")
        } else {
            write!(f, "{seconds}s")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySource;

    fn path() -> &'static Path {
        Path::new("/proc/uptime")
    }

    #[test]
    fn test_parse_truncates_fraction() {
        let up = Uptime::parse("12345.6 7890", path()).unwrap();
        assert_eq!(up.as_secs(), 12345);
        assert_eq!(up.as_duration(), Duration::from_secs(12345));
    }

    #[test]
    fn test_parse_single_field() {
        let up = Uptime::parse("42.99", path()).unwrap();
        assert_eq!(up.as_secs(), 42);
    }

    #[test]
    fn test_parse_leading_whitespace() {
        let up = Uptime::parse("   500.0   0", path()).unwrap();
        assert_eq!(up.as_secs(), 500);
    }

    #[test]
    fn test_parse_empty_line_is_malformed() {
        let result = Uptime::parse("   ", path());
        assert!(matches!(result, Err(MetricError::MalformedData { .. })));
    }

    #[test]
    fn test_parse_non_numeric() {
        let result = Uptime::parse("abc 123", path());
        assert!(matches!(result, Err(MetricError::ParseFailure { .. })));
    }

    #[test]
    fn test_parse_rejects_negative_and_non_finite() {
        for line in ["-1.5 0", "inf 0", "NaN 0"] {
            let result = Uptime::parse(line, path());
            assert!(
                matches!(result, Err(MetricError::ParseFailure { .. })),
                "line {line:?} should fail to parse"
            );
        }
    }

    #[test]
    fn test_read_from_empty_source() {
        let src = MemorySource::new().with("/proc/uptime", "");
        let result = Uptime::read_from(&src, path());
        assert!(matches!(result, Err(MetricError::MalformedData { .. })));
    }

    #[test]
    fn test_read_from_missing_source() {
        let result = Uptime::read_from(&MemorySource::new(), path());
        assert!(matches!(result, Err(MetricError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_display() {
        assert_eq!(Uptime::from_secs(0).to_string(), "0s");
        assert_eq!(Uptime::from_secs(45).to_string(), "45s");
        assert_eq!(Uptime::from_secs(500).to_string(), "8m20s");
        assert_eq!(Uptime::from_secs(3605).to_string(), "1h0m5s");
        assert_eq!(Uptime::from_secs(100_000).to_string(), "27h46m40s");
    }
}
