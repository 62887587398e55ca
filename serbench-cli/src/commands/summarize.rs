// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `serbench summarize` command - Box-plot candles from a measurement log.

use std::path::Path;

use anyhow::Context;
use serbench_core::analysis::{summarize_log_file, ScenarioCandle};

pub fn execute(file: &Path) -> anyhow::Result<()> {
    tracing::info!(file = %file.display(), "Summarizing measurement log");

    let candles = summarize_log_file(file)
        .with_context(|| format!("Failed to summarize {}", file.display()))?;

    if candles.is_empty() {
        println!("No measurements found in {}", file.display());
        return Ok(());
    }

    print!("{}", render_table(&candles));
    Ok(())
}

fn render_table(candles: &[ScenarioCandle]) -> String {
    let width = candles
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0)
        .max("Scenario".len());

    let mut out = format!(
        "{:<width$} {:>8} {:>10} {:>10} {:>10} {:>10}\n",
        "Scenario",
        "Samples",
        "Min µs",
        "P20 µs",
        "P80 µs",
        "Max µs",
        width = width
    );
    for c in candles {
        out.push_str(&format!(
            "{:<width$} {:>8} {:>10} {:>10} {:>10} {:>10}\n",
            c.name,
            c.samples,
            c.candle.low,
            c.candle.open,
            c.candle.close,
            c.candle.high,
            width = width
        ));
    }
    out
}
