// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Injected time sources for the stopwatch engine.
//!
//! The engine reads time exclusively through the [`Clock`] trait and never
//! selects between candidate sources itself; the choice belongs to whoever
//! constructs the engine. Readings are fractional milliseconds so that
//! sub-millisecond measurements survive the trip into a record.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Trait for reading the current time.
///
/// Deltas come from two readings of one clock, so the epoch does not
/// matter, but readings should not decrease between a start and its stop.
/// [`MonotonicClock`] guarantees that; [`WallClock`] only on a
/// well-behaved system clock. This also allows injecting a mock clock
/// for testing.
pub trait Clock: Send + Sync {
    /// Returns the current reading in milliseconds.
    fn now_ms(&self) -> f64;
}

impl<C: Clock> Clock for &C {
    fn now_ms(&self) -> f64 {
        (*self).now_ms()
    }
}

/// Monotonic clock anchored at its creation instant.
///
/// Readings are milliseconds elapsed since the clock was constructed, so
/// the first reading is near zero and later readings never decrease. This
/// is the default time source.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock anchored at the current instant.
    pub fn new() -> Self {
        MonotonicClock { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Wall clock reading milliseconds since the Unix epoch.
///
/// Useful when records must correlate with external timestamps. May regress
/// if the system clock is adjusted, so prefer [`MonotonicClock`] for pure
/// measurement.
#[derive(Debug, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now_ms(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
