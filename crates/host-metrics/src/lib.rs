// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # host-metrics
//!
//! Reads three host metrics from the Linux procfs:
//!
//! - **Uptime** — seconds since boot from `/proc/uptime`, truncated.
//! - **Load average** — the raw `/proc/loadavg` line, verbatim.
//! - **Memory utilisation** — used/total MiB and percentage derived from
//!   the first five `/proc/meminfo` fields.
//!
//! # Independence
//! The three extractions share nothing. Each one opens, reads and closes
//! its own source on every call, and a failure in one never affects the
//! others. [`MetricReader::report`] collects all three outcomes into a
//! [`HostReport`] without short-circuiting.
//!
//! # Testing without procfs
//! File access goes through the [`LineSource`] trait. [`FileSource`] reads
//! the real filesystem; [`MemorySource`] serves fixed text.
//!
//! # Example
//! ```
//! use host_metrics::{MemorySource, MetricReader, SourcePaths};
//!
//! let source = MemorySource::new()
//!     .with("/proc/uptime", "500.0 0")
//!     .with("/proc/loadavg", "0.10 0.20 0.30 1/200 1234");
//! let reader = MetricReader::new(source, SourcePaths::default());
//!
//! assert_eq!(reader.uptime().unwrap().to_string(), "8m20s");
//! assert!(reader.memory().is_err()); // no meminfo content
//! ```

mod error;
mod load;
mod memory;
mod reader;
mod report;
mod source;
mod uptime;

pub use error::MetricError;
pub use load::LoadAverage;
pub use memory::MemoryUsage;
pub use reader::MetricReader;
pub use report::HostReport;
pub use source::{
    FileSource, LineSource, MemorySource, SourcePaths, LOADAVG_PATH, MEMINFO_PATH, UPTIME_PATH,
};
pub use uptime::Uptime;
