// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! End-to-end integration tests for serbench.
//!
//! These tests run the driver against real sinks and read the measurement
//! log back the way the plotting tools do.

use std::thread;
use std::time::Duration;

use serbench_core::analysis::{parse_last_session, summarize_log_file};
use serbench_core::{
    create_workload, Backend, BackendKind, CodecError, ConfigLoader, Driver, MeasurementLog,
    Person, Repetitions, Reporter,
};
use tempfile::TempDir;

/// Backend whose encode and decode each sleep for one millisecond.
struct SleepBackend;

impl Backend for SleepBackend {
    type Model = Person;

    fn name(&self) -> &'static str {
        "Sleep"
    }

    fn prepare(&self, person: &Person) -> Person {
        person.clone()
    }

    fn encode(&self, _model: &Person) -> Result<Vec<u8>, CodecError> {
        thread::sleep(Duration::from_millis(1));
        Ok(Vec::new())
    }

    fn decode(&self, _bytes: &[u8]) -> Result<Person, CodecError> {
        thread::sleep(Duration::from_millis(1));
        Ok(serbench_core::create_workload_with(0))
    }
}

/// Test the full pipeline with a fixed-cost backend
#[test]
fn test_sleep_backend_end_to_end() {
    let person = create_workload();
    let driver = Driver::new(&person, Repetitions::new(3).unwrap());
    let mut reporter = Reporter::new(Vec::new(), MeasurementLog::new(Vec::new()));

    reporter.begin_session().unwrap();
    let report = driver.run_backend(&SleepBackend, &mut reporter).unwrap();
    reporter.end_session().unwrap();

    for scenario in [&report.serialize, &report.deserialize] {
        assert_eq!(scenario.len(), 3);
        for &sample in scenario.samples() {
            assert!(sample >= 1000, "{} sample {} < 1ms", scenario.name(), sample);
        }
    }

    let (console, log) = reporter.finish().unwrap();
    let console = String::from_utf8(console).unwrap();
    let lines: Vec<_> = console.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Sleep Serialize - min "));
    assert!(lines[1].starts_with("Sleep Deserialize - min "));
    for line in &lines {
        assert!(line.contains(" µs - max "));
        assert!(line.ends_with(" µs"));
    }

    let log = String::from_utf8(log).unwrap();
    let scenarios = parse_last_session(&log).unwrap();
    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[0].name(), "Sleep Serialize");
    assert_eq!(scenarios[0].samples(), report.serialize.samples());
    assert_eq!(scenarios[1].name(), "Sleep Deserialize");
    assert_eq!(scenarios[1].samples(), report.deserialize.samples());
}

/// Test every real backend through the driver and a log file on disk
#[test]
fn test_all_backends_to_log_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("measurements.txt");

    let person = create_workload();
    let driver = Driver::new(&person, Repetitions::new(2).unwrap()).warmup(1);
    let log = MeasurementLog::open(&log_path).expect("Failed to open log");
    let mut reporter = Reporter::new(Vec::new(), log);

    let reports = driver
        .run_all(&BackendKind::ALL, &mut reporter)
        .expect("Benchmark run failed");
    reporter.finish().unwrap();

    assert_eq!(reports.len(), BackendKind::ALL.len());
    for (report, kind) in reports.iter().zip(BackendKind::ALL) {
        assert_eq!(report.backend, kind.label());
        assert_eq!(report.serialize.len(), 2);
        assert_eq!(report.deserialize.len(), 2);
    }

    let candles = summarize_log_file(&log_path).expect("Failed to read log");
    assert_eq!(candles.len(), BackendKind::ALL.len() * 2);
    assert_eq!(candles[0].name, "Bincode Binary Serialize");
    for c in &candles {
        assert_eq!(c.samples, 2);
        assert!(c.candle.low <= c.candle.open);
        assert!(c.candle.close <= c.candle.high);
    }
}

/// Test that the workload is left untouched by a run
#[test]
fn test_workload_not_mutated() {
    let person = create_workload();
    let before = person.clone();

    let driver = Driver::new(&person, Repetitions::new(1).unwrap());
    let mut reporter = Reporter::new(Vec::new(), MeasurementLog::new(Vec::new()));
    driver.run_all(&BackendKind::DEFAULT, &mut reporter).unwrap();

    assert_eq!(person, before);
}

/// Test configuration loading from disk
#[test]
fn test_config_file_loading() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("serbench.yaml");

    std::fs::write(
        &config_path,
        r#"
repetitions: 3
backends: [xml, bincode]
pin_cpu: null
"#,
    )
    .expect("Failed to write config");

    let config = ConfigLoader::load_or_default(Some(config_path.as_path()))
        .expect("Failed to load config");
    assert_eq!(config.repetitions.get(), 3);
    assert_eq!(config.backends, vec![BackendKind::Xml, BackendKind::Bincode]);
    assert_eq!(config.pin_cpu, None);
}

/// Test that an explicitly named but missing config is an error
#[test]
fn test_explicit_missing_config_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("nope.yaml");
    assert!(ConfigLoader::load_or_default(Some(missing.as_path())).is_err());
}
