// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CPU affinity and scheduling priority for the measuring process.
//!
//! Pinning to one core and raising priority reduces scheduler jitter in the
//! samples. Both steps are best effort: a failure becomes a console warning
//! and the run continues.

use nix::errno::Errno;
use nix::sched::{sched_getaffinity, sched_setaffinity, CpuSet};
use nix::unistd::Pid;
use serbench_core::{Config, Niceness};
use thiserror::Error;

/// Errors from process setup. Never fatal.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("CPU {cpu} is out of range (available: {available})")]
    CpuOutOfRange { cpu: usize, available: usize },

    #[error("sched_setaffinity failed: {0}")]
    Affinity(#[source] nix::Error),

    #[error("setpriority to {niceness} failed: {source}")]
    Priority {
        niceness: i32,
        #[source]
        source: nix::Error,
    },
}

/// Pin the calling process to a single CPU core.
pub fn pin_to_cpu(cpu: usize) -> Result<(), SetupError> {
    let available = num_cpus::get();
    if cpu >= available {
        return Err(SetupError::CpuOutOfRange { cpu, available });
    }

    let mut cpuset = CpuSet::new();
    cpuset.set(cpu).map_err(SetupError::Affinity)?;
    // Pid 0 targets the calling thread.
    sched_setaffinity(Pid::from_raw(0), &cpuset).map_err(SetupError::Affinity)?;

    tracing::debug!(cpu = cpu, "Process pinned to CPU");
    Ok(())
}

/// CPUs the calling thread may currently run on.
pub fn current_affinity() -> Result<Vec<usize>, SetupError> {
    let cpuset = sched_getaffinity(Pid::from_raw(0)).map_err(SetupError::Affinity)?;
    Ok((0..CpuSet::count())
        .filter(|&cpu| cpuset.is_set(cpu).unwrap_or(false))
        .collect())
}

/// Set the process niceness. Negative values usually need CAP_SYS_NICE.
pub fn raise_priority(niceness: Niceness) -> Result<(), SetupError> {
    // SAFETY: setpriority only reads its integer arguments.
    let ret = unsafe { libc::setpriority(libc::PRIO_PROCESS, 0, niceness.value()) };
    Errno::result(ret).map_err(|e| SetupError::Priority {
        niceness: niceness.value(),
        source: e,
    })?;

    tracing::debug!(niceness = niceness.value(), "Process priority raised");
    Ok(())
}

/// Apply the configured affinity and priority.
///
/// Returns one console warning per step that failed.
pub fn prepare_process(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(cpu) = config.pin_cpu {
        if let Err(e) = pin_to_cpu(cpu) {
            tracing::warn!(error = %e, "Couldn't set processor affinity");
            warnings.push("Couldn't set processor affinity".to_string());
        }
    }

    if config.raise_priority {
        if let Err(e) = raise_priority(config.niceness) {
            tracing::warn!(error = %e, "Couldn't set process priority");
            warnings.push("Couldn't set process priority".to_string());
        }
    }

    warnings
}
