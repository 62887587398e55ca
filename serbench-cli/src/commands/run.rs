// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `serbench run` command - Measure every configured backend.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use serbench_core::{create_workload, Config, ConfigLoader, Driver, MeasurementLog, Reporter};
use sysinfo::System;

use crate::cpu_affinity;

pub fn execute(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config =
        ConfigLoader::load_or_default(config_path).context("Failed to load configuration")?;

    print_header(&config);

    let log = MeasurementLog::open(&config.log_file).with_context(|| {
        format!(
            "Failed to open measurement log {}",
            config.log_file.display()
        )
    })?;
    let mut reporter = Reporter::new(io::stdout(), log);

    for warning in cpu_affinity::prepare_process(&config) {
        reporter.warn(&warning)?;
    }

    let person = create_workload();
    let driver = Driver::new(&person, config.repetitions).warmup(config.warmup);
    driver
        .run_all(&config.backends, &mut reporter)
        .context("Benchmark run failed")?;

    reporter.finish().context("Failed to flush reports")?;
    tracing::info!(log_file = %config.log_file.display(), "Measurements written");

    if config.pause_on_exit {
        pause()?;
    }

    Ok(())
}

fn print_header(config: &Config) {
    let mut sys = System::new_all();
    sys.refresh_all();

    let cpu_model = sys
        .cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let os = System::long_os_version().unwrap_or_else(|| "Unknown".to_string());
    let backends: Vec<&str> = config.backends.iter().map(|b| b.label()).collect();

    println!("serbench Serialization Benchmark");
    println!("================================");
    println!("OS:          {}", os);
    println!("CPU:         {} ({} cores)", cpu_model, sys.cpus().len());
    println!("Memory:      {} MiB", sys.total_memory() / (1024 * 1024));
    println!("Repetitions: {}", config.repetitions);
    println!("Backends:    {}", backends.join(", "));
    println!("Log file:    {}", config.log_file.display());
    println!();
}

fn pause() -> anyhow::Result<()> {
    print!("Press Enter to exit...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
