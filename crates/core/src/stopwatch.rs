// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The stopwatch engine: named timers, a record log, and report dispatch.
//!
//! A [`Stopwatch`] tracks any number of named timers. `start` marks a name
//! pending, `stop` completes it and appends a [`Record`] to the engine's
//! append-only log. Reports render the log through an installed report
//! function or the built-in line rendering. The clock and the output sink
//! are both injected, so tests (and hosts with their own notions of time
//! and logging) swap them freely.
//!
//! An engine is a plain value with no internal synchronization. Share one
//! across threads by wrapping it in a lock on the host side.

use std::collections::HashMap;

use crate::clock::{Clock, MonotonicClock};
use crate::detect;
use crate::error::Error;
use crate::record::Record;
use crate::report::{render_lines, LineReportFn, ReportFn};
use crate::sink::{Sink, TracingSink};

/// Environment variable controlling the `errors` flag.
pub const ERRORS_ENV: &str = "SPLITS_ERRORS";

/// Environment variable controlling the `interactive` flag.
pub const INTERACTIVE_ENV: &str = "SPLITS_INTERACTIVE";

/// A single-process engine for named wall-clock timers.
///
/// Each name is either idle or pending. `start` makes it pending,
/// recording the clock reading; calling `start` again before `stop`
/// discards the earlier reading. `stop` returns the name to idle and
/// appends one record. Records accumulate until [`reset_log`] clears
/// them; nothing is persisted.
///
/// Misuse (empty names, stopping an idle name, installing a hooked
/// function) never panics and never interrupts the caller. With
/// [`errors`] set, each such case emits one line through the sink.
///
/// [`reset_log`]: Stopwatch::reset_log
/// [`errors`]: Stopwatch::errors
pub struct Stopwatch<C = MonotonicClock, S = TracingSink> {
    clock: C,
    sink: S,
    pending: HashMap<String, f64>,
    log: Vec<Record>,
    report_fn: Option<ReportFn>,
    line_report_fn: Option<LineReportFn>,
    /// Surface misuse through the sink. Off by default: misuse is
    /// silently ignored.
    pub errors: bool,
    /// Echo every completed record through the sink as soon as `stop`
    /// appends it.
    pub interactive: bool,
}

impl Stopwatch {
    /// Creates an engine on the monotonic clock, logging through tracing.
    pub fn new() -> Self {
        Stopwatch::with_clock_and_sink(MonotonicClock::new(), TracingSink)
    }

    /// Creates an engine with flags taken from the environment.
    ///
    /// `SPLITS_ERRORS` sets [`errors`] (default off). `SPLITS_INTERACTIVE`
    /// sets [`interactive`]; when unset, interactive mode follows
    /// [`detect::is_interactive_session`].
    ///
    /// [`errors`]: Stopwatch::errors
    /// [`interactive`]: Stopwatch::interactive
    pub fn from_env() -> Self {
        let mut stopwatch = Stopwatch::new();
        stopwatch.errors = detect::env_flag(ERRORS_ENV).unwrap_or(false);
        stopwatch.interactive =
            detect::env_flag(INTERACTIVE_ENV).unwrap_or_else(detect::is_interactive_session);
        stopwatch
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Stopwatch::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    /// Creates an engine reading the given clock, logging through tracing.
    pub fn with_clock(clock: C) -> Self {
        Stopwatch::with_clock_and_sink(clock, TracingSink)
    }
}

impl<C: Clock, S: Sink> Stopwatch<C, S> {
    /// Creates an engine with both the clock and the sink injected.
    pub fn with_clock_and_sink(clock: C, sink: S) -> Self {
        Stopwatch {
            clock,
            sink,
            pending: HashMap::new(),
            log: Vec::new(),
            report_fn: None,
            line_report_fn: None,
            errors: false,
            interactive: false,
        }
    }

    /// Starts (or restarts) the named timer.
    ///
    /// An empty name is rejected before the clock is read. Restarting a
    /// pending name overwrites its start reading; the earlier start is
    /// lost without producing a record.
    pub fn start(&mut self, name: &str) {
        if name.is_empty() {
            self.emit_error(Error::MissingName);
            return;
        }
        let now = self.clock.now_ms();
        self.pending.insert(name.to_string(), now);
    }

    /// Stops the named timer and appends its record to the log.
    ///
    /// Stopping a name with no pending start leaves the log untouched.
    /// On success the line report function (if installed) runs with the
    /// new record, then interactive mode echoes its display form.
    pub fn stop(&mut self, name: &str) {
        let start = match self.pending.remove(name) {
            Some(start) => start,
            None => {
                self.emit_error(Error::UnknownTimer(name.to_string()));
                return;
            }
        };
        let stop = self.clock.now_ms();
        self.log.push(Record::new(name, start, stop));

        if let Some(record) = self.log.last() {
            if let Some(f) = self.line_report_fn.as_mut() {
                f.call(record);
            }
            if self.interactive {
                self.sink.log(&record.to_string());
            }
        }
    }

    /// Reports every completed record, oldest first.
    ///
    /// With a report function installed the whole log is handed to it in
    /// one call. Without one, the log renders as one line per record and
    /// goes to the sink as a single message.
    pub fn report(&mut self) {
        match self.report_fn.as_mut() {
            Some(f) => f.call(&self.log),
            None => self.sink.log(&render_lines(&self.log)),
        }
    }

    /// Reports the completed records for one name, newest first.
    ///
    /// Dispatch works exactly as in [`report`]; only the selection and
    /// the ordering differ.
    ///
    /// [`report`]: Stopwatch::report
    pub fn report_for(&mut self, name: &str) {
        let matching: Vec<Record> = self
            .log
            .iter()
            .rev()
            .filter(|record| record.name == name)
            .cloned()
            .collect();
        match self.report_fn.as_mut() {
            Some(f) => f.call(&matching),
            None => self.sink.log(&render_lines(&matching)),
        }
    }

    /// The completed records, oldest first.
    pub fn log(&self) -> &[Record] {
        &self.log
    }

    /// Installs the report function used by [`report`] and [`report_for`].
    ///
    /// Hooked functions are refused; the previously installed function
    /// (if any) stays in place.
    ///
    /// [`report`]: Stopwatch::report
    /// [`report_for`]: Stopwatch::report_for
    pub fn set_report_method(&mut self, f: ReportFn) {
        if f.is_hooked() {
            self.emit_error(Error::HookedMethodReassignment {
                method: "set_report_method",
            });
            return;
        }
        self.report_fn = Some(f);
    }

    /// Installs the per-record function run by every successful `stop`.
    ///
    /// Installing one switches line-report mode on. Hooked functions are
    /// refused; the previously installed function (if any) stays in place.
    pub fn set_line_report_method(&mut self, f: LineReportFn) {
        if f.is_hooked() {
            self.emit_error(Error::HookedMethodReassignment {
                method: "set_line_report_method",
            });
            return;
        }
        self.line_report_fn = Some(f);
    }

    /// Clears the record log. Pending timers are unaffected.
    pub fn reset_log(&mut self) {
        self.log.clear();
    }

    /// Runs a closure under the named timer, returning its value.
    ///
    /// Equivalent to `start`, the closure, `stop`. The same flags and
    /// report machinery apply.
    pub fn measure<F, R>(&mut self, name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.start(name);
        let result = f();
        self.stop(name);
        result
    }

    fn emit_error(&self, err: Error) {
        if self.errors {
            self.sink.log(&err.to_string());
        }
    }
}

#[cfg(test)]
#[path = "stopwatch_tests.rs"]
mod tests;
