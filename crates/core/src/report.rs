// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pluggable consumers for completed measurements.
//!
//! A stopwatch renders its record log through an installed report function,
//! falling back to the built-in line rendering when none is installed.
//! Report functions carry a tag: `Plain` values come from the host and may
//! be installed, `Hooked` values were produced by instrumentation and the
//! engine refuses to install them.

use crate::record::Record;

/// Tagged consumer for a slice of completed records.
pub enum ReportFn {
    /// Host-supplied consumer, eligible for installation.
    Plain(Box<dyn FnMut(&[Record]) + Send>),
    /// Consumer produced by instrumentation. Callable, never installable.
    Hooked(Box<dyn FnMut(&[Record]) + Send>),
}

impl ReportFn {
    /// Wraps a closure as an installable report function.
    pub fn plain<F>(f: F) -> Self
    where
        F: FnMut(&[Record]) + Send + 'static,
    {
        ReportFn::Plain(Box::new(f))
    }

    /// Wraps a closure as an instrumentation-produced report function.
    pub fn hooked<F>(f: F) -> Self
    where
        F: FnMut(&[Record]) + Send + 'static,
    {
        ReportFn::Hooked(Box::new(f))
    }

    /// True for functions produced by instrumentation.
    pub fn is_hooked(&self) -> bool {
        matches!(self, ReportFn::Hooked(_))
    }

    pub(crate) fn call(&mut self, records: &[Record]) {
        match self {
            ReportFn::Plain(f) | ReportFn::Hooked(f) => f(records),
        }
    }
}

/// Tagged consumer for a single completed record.
///
/// Installing one switches the stopwatch into line-report mode: the
/// function runs once per `stop`, with the record it just appended.
pub enum LineReportFn {
    /// Host-supplied consumer, eligible for installation.
    Plain(Box<dyn FnMut(&Record) + Send>),
    /// Consumer produced by instrumentation. Callable, never installable.
    Hooked(Box<dyn FnMut(&Record) + Send>),
}

impl LineReportFn {
    /// Wraps a closure as an installable line report function.
    pub fn plain<F>(f: F) -> Self
    where
        F: FnMut(&Record) + Send + 'static,
    {
        LineReportFn::Plain(Box::new(f))
    }

    /// Wraps a closure as an instrumentation-produced line report function.
    pub fn hooked<F>(f: F) -> Self
    where
        F: FnMut(&Record) + Send + 'static,
    {
        LineReportFn::Hooked(Box::new(f))
    }

    /// True for functions produced by instrumentation.
    pub fn is_hooked(&self) -> bool {
        matches!(self, LineReportFn::Hooked(_))
    }

    pub(crate) fn call(&mut self, record: &Record) {
        match self {
            LineReportFn::Plain(f) | LineReportFn::Hooked(f) => f(record),
        }
    }
}

/// Renders records one per line in their display form.
///
/// This is what the built-in report emits when no report function is
/// installed. An empty slice renders as the empty string.
pub fn render_lines(records: &[Record]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders records as JSON Lines, one object per record.
///
/// Records that fail to serialize (non-finite readings) are skipped.
pub fn render_jsonl(records: &[Record]) -> String {
    records
        .iter()
        .filter_map(|r| serde_json::to_string(r).ok())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
