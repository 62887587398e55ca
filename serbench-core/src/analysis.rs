// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Reading the measurement log back for plotting.
//!
//! A session is the block of lines between a `Starting measurements` marker
//! and the following `Stopping measurements` marker (or end of file). Only
//! the most recent session is analysed because the log is append-only.

use std::path::Path;

use crate::error::{BenchError, BenchResult};
use crate::harness::Sample;
use crate::metrics::{Candle, ScenarioResult};
use crate::reporter::{SESSION_START, SESSION_STOP};

/// Box-plot data for one scenario of a logged session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioCandle {
    pub name: String,
    pub samples: usize,
    pub candle: Candle,
}

/// Parse one `|<timestamp>|<level>|<name>: <s0>:<s1>...` line.
///
/// Returns `Ok(None)` for lines that are not four pipe-delimited fields, are
/// not DEBUG level, or carry no samples. `line_no` is 1-based and only used
/// in error messages.
pub fn parse_line(line: &str, line_no: usize) -> BenchResult<Option<ScenarioResult>> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != 4 || fields[2] != "DEBUG" {
        return Ok(None);
    }

    let mut parts = fields[3].split(':');
    let name = match parts.next() {
        Some(name) => name.trim(),
        None => return Ok(None),
    };

    let mut samples: Vec<Sample> = Vec::new();
    for token in parts {
        let token = token.trim();
        let sample = token.parse::<Sample>().map_err(|e| BenchError::LogParse {
            line: line_no,
            reason: format!("sample '{}' in '{}': {}", token, name, e),
        })?;
        samples.push(sample);
    }

    if samples.is_empty() {
        return Ok(None);
    }

    Ok(Some(ScenarioResult::from_samples(name, samples)))
}

/// Parse the most recent session of a measurement log.
pub fn parse_last_session(content: &str) -> BenchResult<Vec<ScenarioResult>> {
    let lines: Vec<&str> = content.lines().collect();

    let start = match lines.iter().rposition(|l| l.contains(SESSION_START)) {
        Some(idx) => idx + 1,
        None => return Ok(Vec::new()),
    };

    let mut scenarios = Vec::new();
    for (offset, line) in lines[start..].iter().enumerate() {
        if line.contains(SESSION_STOP) {
            break;
        }
        if let Some(scenario) = parse_line(line, start + offset + 1)? {
            scenarios.push(scenario);
        }
    }

    Ok(scenarios)
}

/// Compute candles for every scenario of the most recent session.
pub fn summarize_log(content: &str) -> BenchResult<Vec<ScenarioCandle>> {
    let scenarios = parse_last_session(content)?;
    Ok(scenarios
        .iter()
        .filter_map(|s| {
            Candle::from_samples(s.samples()).map(|candle| ScenarioCandle {
                name: s.name().to_string(),
                samples: s.len(),
                candle,
            })
        })
        .collect())
}

/// Read a log file and compute candles for its most recent session.
pub fn summarize_log_file(path: impl AsRef<Path>) -> BenchResult<Vec<ScenarioCandle>> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| BenchError::Io {
        context: "reading measurement log",
        source: e,
    })?;
    summarize_log(&content)
}
