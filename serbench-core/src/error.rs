//! Custom error types for serbench.
//!
//! Every failure is an explicit enum variant. The library never returns
//! `Box<dyn Error>` or `anyhow::Result`; the binary wraps these at its edge.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    // =========================================================================
    // Configuration Errors - Fail-Fast Before Any Measurement
    // =========================================================================
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // =========================================================================
    // Codec Errors - A Failed Trial Invalidates The Whole Comparison
    // =========================================================================
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    // =========================================================================
    // Aggregation Errors
    // =========================================================================
    #[error("Scenario '{name}' has no samples")]
    EmptyScenario { name: String },

    // =========================================================================
    // Measurement Log Errors
    // =========================================================================
    #[error("Malformed measurement log line {line}: {reason}")]
    LogParse { line: usize, reason: String },

    // =========================================================================
    // System Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration errors. Any of these prevents the benchmark from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    Parse { message: String },

    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Encode/decode failures reported by a backend.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("{backend} failed to encode workload: {reason}")]
    Encode { backend: &'static str, reason: String },

    #[error("{backend} failed to decode payload: {reason}")]
    Decode { backend: &'static str, reason: String },
}

/// Result type alias using BenchError.
pub type BenchResult<T> = Result<T, BenchError>;
