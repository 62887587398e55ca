// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Result reporting.
//!
//! Two sinks receive every scenario:
//! - the console, one summary line: `<name> - min <min> µs - max <max> µs - avg <mean> µs`
//! - the measurement log, one pipe-delimited line:
//!   `|<timestamp>|<LEVEL>|<name>: <s0>:<s1>:...`
//!
//! The log format is parsed back by [`crate::analysis`], which splits on `|`
//! and then `:`. Sample order is preserved.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::error::{BenchError, BenchResult};
use crate::metrics::ScenarioResult;

/// Marker written before the first scenario of a run.
pub const SESSION_START: &str = "Starting measurements";
/// Marker written after the last scenario of a run.
pub const SESSION_STOP: &str = "Stopping measurements";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Severity column of the measurement log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Debug => write!(f, "DEBUG"),
        }
    }
}

/// Render the console summary line for a scenario.
pub fn summary_line(scenario: &ScenarioResult) -> BenchResult<String> {
    let summary = scenario.summarize()?;
    Ok(format!(
        "{} - min {} µs - max {} µs - avg {} µs",
        scenario.name(),
        summary.min,
        summary.max,
        summary.mean
    ))
}

/// Render the machine-parsable payload for a scenario: `<name>: 5:7`.
pub fn measurement_payload(scenario: &ScenarioResult) -> String {
    let joined = scenario
        .samples()
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(":");
    format!("{}: {}", scenario.name(), joined)
}

/// Render one full measurement log line.
pub fn log_line(timestamp: &str, level: LogLevel, message: &str) -> String {
    format!("|{}|{}|{}", timestamp, level, message)
}

/// Append-only measurement log.
pub struct MeasurementLog<W: Write> {
    writer: W,
}

impl MeasurementLog<BufWriter<File>> {
    /// Open (or create) a log file for appending.
    ///
    /// Failing to open the log is fatal; nothing is measured without it.
    pub fn open(path: impl AsRef<Path>) -> BenchResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())
            .map_err(|e| BenchError::Io {
                context: "opening measurement log",
                source: e,
            })?;

        tracing::debug!(path = %path.as_ref().display(), "Measurement log opened");
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> MeasurementLog<W> {
    /// Wrap an arbitrary writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one timestamped line.
    pub fn write_line(&mut self, level: LogLevel, message: &str) -> BenchResult<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        writeln!(self.writer, "{}", log_line(&timestamp, level, message)).map_err(|e| {
            BenchError::Io {
                context: "writing measurement log",
                source: e,
            }
        })
    }

    /// Mark the start of a benchmark session.
    pub fn begin_session(&mut self) -> BenchResult<()> {
        self.write_line(LogLevel::Info, SESSION_START)
    }

    /// Mark the end of a benchmark session.
    pub fn end_session(&mut self) -> BenchResult<()> {
        self.write_line(LogLevel::Info, SESSION_STOP)
    }

    /// Record every sample of a scenario on one line.
    pub fn record(&mut self, scenario: &ScenarioResult) -> BenchResult<()> {
        self.write_line(LogLevel::Debug, &measurement_payload(scenario))
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> BenchResult<W> {
        self.writer.flush().map_err(|e| BenchError::Io {
            context: "flushing measurement log",
            source: e,
        })?;
        Ok(self.writer)
    }
}

/// Feeds scenarios to the console and the measurement log.
pub struct Reporter<C: Write, L: Write> {
    console: C,
    log: MeasurementLog<L>,
}

impl<C: Write, L: Write> Reporter<C, L> {
    pub fn new(console: C, log: MeasurementLog<L>) -> Self {
        Self { console, log }
    }

    /// Print a free-form line on the console sink.
    pub fn note(&mut self, message: &str) -> BenchResult<()> {
        writeln!(self.console, "{}", message).map_err(|e| BenchError::Io {
            context: "writing console output",
            source: e,
        })
    }

    /// Print a warning on the console and record it in the log.
    pub fn warn(&mut self, message: &str) -> BenchResult<()> {
        self.note(message)?;
        self.log.write_line(LogLevel::Warning, message)
    }

    pub fn begin_session(&mut self) -> BenchResult<()> {
        self.log.begin_session()
    }

    pub fn end_session(&mut self) -> BenchResult<()> {
        self.log.end_session()
    }

    /// Print the summary line, then log the raw samples.
    pub fn report(&mut self, scenario: &ScenarioResult) -> BenchResult<()> {
        let line = summary_line(scenario)?;
        self.note(&line)?;
        self.log.record(scenario)
    }

    /// Flush both sinks and return them.
    pub fn finish(mut self) -> BenchResult<(C, L)> {
        self.console.flush().map_err(|e| BenchError::Io {
            context: "flushing console output",
            source: e,
        })?;
        let log = self.log.finish()?;
        Ok((self.console, log))
    }
}
