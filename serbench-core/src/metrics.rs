// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Sample aggregation for benchmark scenarios.
//!
//! A scenario collects one sample per repetition. Statistics are derived on
//! demand; captured samples are never modified.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult};
use crate::harness::Sample;

/// Direction of a measured codec call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Serialize,
    Deserialize,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Serialize => write!(f, "Serialize"),
            Direction::Deserialize => write!(f, "Deserialize"),
        }
    }
}

/// Min/max/mean of a scenario, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub min: Sample,
    pub max: Sample,
    /// Integer mean (sum divided by count, truncated).
    pub mean: Sample,
}

/// Named, ordered sequence of samples for one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    name: String,
    samples: Vec<Sample>,
}

impl ScenarioResult {
    /// Create an empty scenario.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            samples: Vec::new(),
        }
    }

    /// Create an empty scenario with room for `capacity` samples.
    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Create a scenario from already captured samples.
    pub fn from_samples(name: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }

    /// Scenario name, e.g. `"Serde Json Serialize"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Samples in capture order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Append one sample.
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Drop all samples and start over under a new name.
    pub fn reset(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.samples.clear();
    }

    /// Drop all samples, keeping the name.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Compute min, max and mean. Fails on an empty scenario.
    pub fn summarize(&self) -> BenchResult<Summary> {
        let (min, max) = match (self.samples.iter().min(), self.samples.iter().max()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => {
                return Err(BenchError::EmptyScenario {
                    name: self.name.clone(),
                })
            }
        };

        let sum: u128 = self.samples.iter().map(|&s| s as u128).sum();
        let mean = (sum / self.samples.len() as u128) as Sample;

        Ok(Summary { min, max, mean })
    }
}

/// Box-plot candle: low, 20th percentile, 80th percentile, high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    pub low: Sample,
    pub open: Sample,
    pub close: Sample,
    pub high: Sample,
}

impl Candle {
    /// Build a candle from unsorted samples. Returns `None` for no samples.
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        let len = sorted.len();

        Some(Self {
            low: sorted[0],
            open: sorted[(len as f64 * 0.2).floor() as usize],
            close: sorted[(len as f64 * 0.8).floor() as usize],
            high: sorted[len - 1],
        })
    }
}
