// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Timed action runner.
//!
//! Measures a single synchronous action against the monotonic clock and
//! reports whole microseconds.

use std::time::{Duration, Instant};

/// A single measured duration, in microseconds.
pub type Sample = u64;

/// Timer for measuring individual operations.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop the timer and return elapsed microseconds (truncated).
    pub fn stop(self) -> Sample {
        to_micros(self.start.elapsed())
    }

    /// Stop the timer and return the elapsed duration.
    pub fn elapsed(self) -> Duration {
        self.start.elapsed()
    }
}

/// Run `action` once and measure how long it took.
///
/// The clock is read immediately before and after the call. An error from
/// `action` is returned as-is and no sample is produced.
pub fn measure<F, T, E>(action: F) -> Result<(T, Sample), E>
where
    F: FnOnce() -> Result<T, E>,
{
    let timer = Timer::start();
    let output = action()?;
    let elapsed = timer.stop();
    Ok((output, elapsed))
}

/// Truncate a duration to whole microseconds, saturating at `u64::MAX`.
pub fn to_micros(duration: Duration) -> Sample {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_timer() {
        let timer = Timer::start();
        thread::sleep(Duration::from_millis(10));
        let elapsed = timer.stop();

        // Should be at least 10ms
        assert!(elapsed >= 10_000, "Elapsed {} < 10ms", elapsed);
    }

    #[test]
    fn test_measure_returns_output() {
        let (result, micros) = measure(|| {
            thread::sleep(Duration::from_millis(5));
            Ok::<_, ()>(42)
        })
        .unwrap();

        assert_eq!(result, 42);
        assert!(micros >= 5_000);
    }

    #[test]
    fn test_measure_propagates_error() {
        let result: Result<((), Sample), &str> = measure(|| Err("boom"));
        assert_eq!(result.unwrap_err(), "boom");
    }

    #[test]
    fn test_to_micros_truncates() {
        assert_eq!(to_micros(Duration::from_nanos(1_999)), 1);
        assert_eq!(to_micros(Duration::from_nanos(999)), 0);
    }
}
