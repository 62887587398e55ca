// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! serbench CLI
//!
//! Runs the serialization benchmark and summarizes measurement logs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod cpu_affinity;

/// serbench - serialization micro-benchmark harness
#[derive(Parser)]
#[command(name = "serbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (serbench.yaml is used when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the benchmark (default)
    Run,

    /// Print box-plot candles for the latest session of a measurement log
    Summarize {
        /// Path to the measurement log
        #[arg(default_value = "measurements.txt")]
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr; stdout carries the summary lines
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::execute(cli.config.as_deref()),
        Commands::Summarize { file } => commands::summarize::execute(&file),
    }
}
