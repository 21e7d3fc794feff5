// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The completed-measurement value type.
//!
//! One `Record` is produced each time a pending timer is stopped. Records
//! are plain data: the engine never mutates one after appending it to the
//! log, and `delta` is always derived from the two clock readings rather
//! than set independently.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single completed measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Record {
    /// Name of the timer that produced this record.
    pub name: String,
    /// Clock reading when the timer started, in milliseconds.
    pub start: f64,
    /// Clock reading when the timer stopped, in milliseconds.
    pub stop: f64,
    /// Elapsed time in milliseconds (`stop - start`).
    pub delta: f64,
}

impl Record {
    /// Creates a record for a completed measurement, deriving `delta`.
    pub fn new(name: impl Into<String>, start: f64, stop: f64) -> Self {
        Record { name: name.into(), start, stop, delta: stop - start }
    }

    /// Elapsed time in seconds.
    pub fn seconds(&self) -> f64 {
        self.delta / 1000.0
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.4} seconds", self.name, self.seconds())
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
