// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark driver.
//!
//! Visits each backend in turn. Per backend, every repetition encodes the
//! shared workload into a fresh buffer and decodes it into a fresh value,
//! timing each call separately. The two resulting scenarios are reported
//! before the next backend starts. Any codec error aborts the run.

use std::io::Write;

use crate::backend::{
    Backend, BackendKind, BincodeBackend, JsonBackend, MessagePackBackend, ProtobufBackend,
    XmlBackend,
};
use crate::error::BenchResult;
use crate::harness::measure;
use crate::metrics::{Direction, ScenarioResult};
use crate::reporter::Reporter;
use crate::types::Repetitions;
use crate::workload::Person;

/// Both scenarios measured for one backend.
#[derive(Debug, Clone)]
pub struct BackendReport {
    pub backend: &'static str,
    pub serialize: ScenarioResult,
    pub deserialize: ScenarioResult,
}

/// Runs the encode/decode loop over a read-only workload.
pub struct Driver<'a> {
    person: &'a Person,
    repetitions: Repetitions,
    warmup: u32,
}

impl<'a> Driver<'a> {
    pub fn new(person: &'a Person, repetitions: Repetitions) -> Self {
        Self {
            person,
            repetitions,
            warmup: 0,
        }
    }

    /// Set the number of unrecorded round trips run before measuring.
    pub fn warmup(mut self, iterations: u32) -> Self {
        self.warmup = iterations;
        self
    }

    /// Measure one backend without reporting.
    pub fn measure_backend<B: Backend>(&self, backend: &B) -> BenchResult<BackendReport> {
        let name = backend.name();
        let model = backend.prepare(self.person);

        for _ in 0..self.warmup {
            let bytes = backend.encode(&model)?;
            backend.decode(&bytes)?;
        }

        let count = self.repetitions.get();
        let mut serialize =
            ScenarioResult::with_capacity(format!("{} {}", name, Direction::Serialize), count);
        let mut deserialize =
            ScenarioResult::with_capacity(format!("{} {}", name, Direction::Deserialize), count);

        for _ in 0..count {
            let (bytes, encode_micros) = measure(|| backend.encode(&model))?;
            serialize.push(encode_micros);

            let (_decoded, decode_micros) = measure(|| backend.decode(&bytes))?;
            deserialize.push(decode_micros);
        }

        tracing::debug!(backend = name, samples = count, "Backend measured");

        Ok(BackendReport {
            backend: name,
            serialize,
            deserialize,
        })
    }

    /// Measure one backend and hand both scenarios to the reporter.
    pub fn run_backend<B, C, L>(
        &self,
        backend: &B,
        reporter: &mut Reporter<C, L>,
    ) -> BenchResult<BackendReport>
    where
        B: Backend,
        C: Write,
        L: Write,
    {
        let report = self.measure_backend(backend)?;
        reporter.report(&report.serialize)?;
        reporter.report(&report.deserialize)?;
        Ok(report)
    }

    /// Dispatch one enumerated backend.
    pub fn run_kind<C: Write, L: Write>(
        &self,
        kind: BackendKind,
        reporter: &mut Reporter<C, L>,
    ) -> BenchResult<BackendReport> {
        match kind {
            BackendKind::Bincode => self.run_backend(&BincodeBackend, reporter),
            BackendKind::Json => self.run_backend(&JsonBackend, reporter),
            BackendKind::Xml => self.run_backend(&XmlBackend, reporter),
            BackendKind::Protobuf => self.run_backend(&ProtobufBackend, reporter),
            BackendKind::MessagePack => self.run_backend(&MessagePackBackend, reporter),
        }
    }

    /// Run a full session over `kinds`, bracketed by session markers.
    pub fn run_all<C: Write, L: Write>(
        &self,
        kinds: &[BackendKind],
        reporter: &mut Reporter<C, L>,
    ) -> BenchResult<Vec<BackendReport>> {
        tracing::info!(
            backends = kinds.len(),
            repetitions = %self.repetitions,
            warmup = self.warmup,
            "Starting measurements"
        );
        reporter.begin_session()?;

        let mut reports = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            reports.push(self.run_kind(kind, reporter)?);
        }

        reporter.end_session()?;
        tracing::info!("Stopping measurements");
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BenchError, CodecError};
    use crate::reporter::MeasurementLog;
    use crate::workload::create_workload_with;
    use std::cell::Cell;

    /// Backend that fails after a fixed number of encodes.
    struct FlakyBackend {
        encodes_left: Cell<u32>,
    }

    impl Backend for FlakyBackend {
        type Model = Person;

        fn name(&self) -> &'static str {
            "Flaky"
        }

        fn prepare(&self, person: &Person) -> Person {
            person.clone()
        }

        fn encode(&self, _model: &Person) -> Result<Vec<u8>, CodecError> {
            let left = self.encodes_left.get();
            if left == 0 {
                return Err(CodecError::Encode {
                    backend: self.name(),
                    reason: "out of budget".to_string(),
                });
            }
            self.encodes_left.set(left - 1);
            Ok(vec![1])
        }

        fn decode(&self, _bytes: &[u8]) -> Result<Person, CodecError> {
            Ok(create_workload_with(0))
        }
    }

    fn reporter() -> Reporter<Vec<u8>, Vec<u8>> {
        Reporter::new(Vec::new(), MeasurementLog::new(Vec::new()))
    }

    #[test]
    fn test_sample_count_matches_repetitions() {
        let person = create_workload_with(5);
        for count in [1, 2, 7] {
            let driver = Driver::new(&person, Repetitions::new(count).unwrap());
            let report = driver.measure_backend(&JsonBackend).unwrap();
            assert_eq!(report.serialize.len(), count as usize);
            assert_eq!(report.deserialize.len(), count as usize);
        }
    }

    #[test]
    fn test_scenario_names() {
        let person = create_workload_with(1);
        let driver = Driver::new(&person, Repetitions::new(1).unwrap());
        let report = driver.measure_backend(&BincodeBackend).unwrap();

        assert_eq!(report.serialize.name(), "Bincode Binary Serialize");
        assert_eq!(report.deserialize.name(), "Bincode Binary Deserialize");
    }

    #[test]
    fn test_backends_do_not_share_samples() {
        let person = create_workload_with(3);
        let driver = Driver::new(&person, Repetitions::new(4).unwrap());
        let mut reporter = reporter();

        let reports = driver
            .run_all(&[BackendKind::Json, BackendKind::Protobuf], &mut reporter)
            .unwrap();

        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert_eq!(report.serialize.len(), 4);
            assert_eq!(report.deserialize.len(), 4);
        }
    }

    #[test]
    fn test_failure_aborts_run() {
        let person = create_workload_with(1);
        let driver = Driver::new(&person, Repetitions::new(5).unwrap());
        let backend = FlakyBackend {
            encodes_left: Cell::new(2),
        };
        let mut reporter = reporter();

        let result = driver.run_backend(&backend, &mut reporter);
        assert!(matches!(result, Err(BenchError::Codec(_))));

        // Nothing was reported for the aborted backend
        let (console, log) = reporter.finish().unwrap();
        assert!(console.is_empty());
        assert!(log.is_empty());
    }

    #[test]
    fn test_warmup_not_recorded() {
        let person = create_workload_with(1);
        let backend = FlakyBackend {
            encodes_left: Cell::new(5),
        };
        let driver = Driver::new(&person, Repetitions::new(3).unwrap()).warmup(2);

        let report = driver.measure_backend(&backend).unwrap();
        assert_eq!(report.serialize.len(), 3);
        assert_eq!(backend.encodes_left.get(), 0);
    }
}
