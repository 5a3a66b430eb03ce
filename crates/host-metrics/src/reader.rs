// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`MetricReader`]: three independent extraction operations over one
//! [`LineSource`].

use crate::{
    FileSource, HostReport, LineSource, LoadAverage, MemoryUsage, MetricError, SourcePaths,
    Uptime,
};

/// Reads host metrics from a [`LineSource`].
///
/// The reader holds no state besides its source and paths: every call
/// re-reads its source, so repeated calls over unchanged content return
/// identical results.
#[derive(Debug, Clone)]
pub struct MetricReader<S = FileSource> {
    source: S,
    paths: SourcePaths,
}

impl MetricReader<FileSource> {
    /// A reader over the real filesystem at `paths`.
    pub fn from_files(paths: SourcePaths) -> Self {
        Self::new(FileSource, paths)
    }
}

impl<S: LineSource> MetricReader<S> {
    /// Creates a reader over `source` using `paths`.
    pub fn new(source: S, paths: SourcePaths) -> Self {
        Self { source, paths }
    }

    /// Seconds since boot, truncated to whole seconds.
    pub fn uptime(&self) -> Result<Uptime, MetricError> {
        Uptime::read_from(&self.source, &self.paths.uptime)
    }

    /// The raw load-average line.
    pub fn load_average(&self) -> Result<LoadAverage, MetricError> {
        LoadAverage::read_from(&self.source, &self.paths.loadavg)
    }

    /// Memory utilisation from the first five meminfo fields.
    pub fn memory(&self) -> Result<MemoryUsage, MetricError> {
        MemoryUsage::read_from(&self.source, &self.paths.meminfo)
    }

    /// Runs all three extractions. A failure in one never prevents the
    /// others from being read.
    pub fn report(&self) -> HostReport {
        HostReport {
            uptime: self.uptime(),
            load: self.load_average(),
            memory: self.memory(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySource;

    const MEMINFO: &str = "\
MemTotal:        3963904 kB
MemFree:         2028000 kB
MemAvailable:    2900000 kB
Buffers:          500000 kB
Cached:           300000 kB
";

    fn reader() -> MetricReader<MemorySource> {
        let src = MemorySource::new()
            .with("/proc/uptime", "500.0 0\n")
            .with("/proc/loadavg", "0.10 0.20 0.30 1/200 1234\n")
            .with("/proc/meminfo", MEMINFO);
        MetricReader::new(src, SourcePaths::default())
    }

    #[test]
    fn test_all_metrics() {
        let r = reader();
        assert_eq!(r.uptime().unwrap(), Uptime::from_secs(500));
        assert_eq!(r.load_average().unwrap().as_str(), "0.10 0.20 0.30 1/200 1234");
        assert_eq!(r.memory().unwrap().to_string(), "1109 MiB / 3871 MiB (28%)");
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let r = reader();
        for _ in 0..3 {
            assert_eq!(r.uptime().unwrap().as_secs(), 500);
            assert_eq!(r.load_average().unwrap(), r.load_average().unwrap());
            assert_eq!(r.memory().unwrap(), r.memory().unwrap());
        }
    }

    #[test]
    fn test_failures_are_independent() {
        let src = MemorySource::new()
            .with("/proc/uptime", "garbage\n")
            .with("/proc/meminfo", MEMINFO);
        let report = MetricReader::new(src, SourcePaths::default()).report();

        assert!(matches!(report.uptime, Err(MetricError::ParseFailure { .. })));
        assert!(matches!(report.load, Err(MetricError::SourceUnavailable { .. })));
        assert!(report.memory.is_ok());
    }

    #[test]
    fn test_from_files() {
        let dir = std::env::temp_dir().join("host_metrics_reader_test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("loadavg"), "0.50 0.40 0.30 2/100 42\n").unwrap();

        let r = MetricReader::from_files(SourcePaths::under(&dir));
        assert_eq!(r.load_average().unwrap().as_str(), "0.50 0.40 0.30 2/100 42");
        assert!(matches!(
            r.uptime(),
            Err(MetricError::SourceUnavailable { .. })
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_borrowed_source() {
        let src = MemorySource::new().with("/x/uptime", "7.5 1.0");
        let r = MetricReader::new(&src, SourcePaths::under(std::path::Path::new("/x")));
        assert_eq!(r.uptime().unwrap().as_secs(), 7);
    }
}
