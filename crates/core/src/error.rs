// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error conditions surfaced by the stopwatch engine.
//!
//! None of these interrupt control flow. Engine operations always return
//! normally and leave state untouched when a condition fires; the condition
//! is rendered to the sink only while the engine's `errors` flag is set.
//! Callers infer failure from the absence of the expected side effect, not
//! from a return value.

use thiserror::Error;

/// A misuse condition detected by the stopwatch engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `start` was called with an empty name.
    #[error("start: a timer needs a non-empty name")]
    MissingName,

    /// `stop` was called for a name with no pending timer.
    #[error("stop: '{0}' not found")]
    UnknownTimer(String),

    /// A setter was handed a function already produced by instrumentation.
    #[error("{method}: cannot install a hooked function")]
    HookedMethodReassignment {
        /// The setter that refused the function.
        method: &'static str,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
