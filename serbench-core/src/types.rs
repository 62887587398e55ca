// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers for validated inputs.
//!
//! Each type checks its invariant at construction so the driver never has
//! to re-validate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of iterations per scenario.
pub const DEFAULT_REPETITIONS: u32 = 250;

/// Lowest accepted niceness value.
const MIN_NICENESS: i32 = -20;
/// Highest accepted niceness value.
const MAX_NICENESS: i32 = 19;

/// Validated repetition count.
/// Must be at least 1 so every scenario can be summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Repetitions(u32);

impl Repetitions {
    /// Create a new repetition count with validation.
    pub fn new(count: u32) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::InvalidFieldValue {
                field: "repetitions",
                value: count.to_string(),
                reason: "At least one repetition is required".to_string(),
            });
        }
        Ok(Self(count))
    }

    /// Get the count as a `usize` for buffer sizing and loops.
    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

impl Default for Repetitions {
    fn default() -> Self {
        Self(DEFAULT_REPETITIONS)
    }
}

impl fmt::Display for Repetitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Repetitions {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Repetitions> for u32 {
    fn from(r: Repetitions) -> Self {
        r.0
    }
}

/// Validated scheduling niceness (`-20` highest priority, `19` lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Niceness(i32);

impl Niceness {
    /// Create a new niceness with validation.
    pub fn new(value: i32) -> Result<Self, ConfigError> {
        if !(MIN_NICENESS..=MAX_NICENESS).contains(&value) {
            return Err(ConfigError::InvalidFieldValue {
                field: "niceness",
                value: value.to_string(),
                reason: format!("Must be between {} and {}", MIN_NICENESS, MAX_NICENESS),
            });
        }
        Ok(Self(value))
    }

    /// Get the raw niceness value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Default for Niceness {
    fn default() -> Self {
        Self(-10)
    }
}

impl TryFrom<i32> for Niceness {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Niceness> for i32 {
    fn from(n: Niceness) -> Self {
        n.0
    }
}
