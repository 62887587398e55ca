//! serbench Core Library
//!
//! Serialization micro-benchmark harness. Builds one fixed object graph and
//! times repeated encode/decode round trips through several backends.
//!
//! # Pipeline
//!
//! - **Workload**: a `Person` with 1000 `Document` records, built once
//! - **Harness**: times one synchronous call in microseconds
//! - **Metrics**: per-scenario samples with min/max/mean
//! - **Reporter**: console summary line plus a pipe-delimited measurement log
//! - **Driver**: backend × direction × repetitions
//!
//! The measurement log can be read back with [`analysis`] for box plots.

pub mod analysis;
pub mod backend;
pub mod config;
pub mod driver;
pub mod error;
pub mod harness;
pub mod metrics;
pub mod reporter;
pub mod types;
pub mod workload;

// Re-export commonly used types
pub use backend::{Backend, BackendKind, Snapshot};
pub use config::{Config, ConfigLoader};
pub use driver::{BackendReport, Driver};
pub use error::{BenchError, BenchResult, CodecError, ConfigError};
pub use harness::{measure, Sample, Timer};
pub use metrics::{Candle, Direction, ScenarioResult, Summary};
pub use reporter::{LogLevel, MeasurementLog, Reporter};
pub use types::{Niceness, Repetitions};
pub use workload::{create_workload, create_workload_with, Document, Person};
