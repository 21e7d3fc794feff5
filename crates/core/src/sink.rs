// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Injected logging sinks for the stopwatch engine.
//!
//! Every line the engine emits (reports, interactive output, surfaced
//! errors) goes through the [`Sink`] trait. Sinks are infallible by
//! contract: a sink that cannot deliver a line drops it rather than
//! propagating a failure into the measurement path.

use std::io::Write;
use std::sync::Mutex;

/// Trait for consuming report and diagnostic lines.
pub trait Sink: Send + Sync {
    /// Delivers one message.
    fn log(&self, message: &str);
}

impl<S: Sink> Sink for &S {
    fn log(&self, message: &str) {
        (*self).log(message)
    }
}

/// Sink that forwards each message to `tracing::info!`.
///
/// This is the default sink and it is safe everywhere: without a
/// subscriber installed by the host application the events are no-ops.
#[derive(Debug, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Sink that writes each message to standard error.
#[derive(Debug, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn log(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Sink that discards every message.
#[derive(Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn log(&self, _message: &str) {}
}

/// Sink that appends each message as one line to any writer.
///
/// Write failures are swallowed; the sink contract is infallible.
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wraps a writer in a sink.
    pub fn new(writer: W) -> Self {
        WriterSink { writer: Mutex::new(writer) }
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn log(&self, message: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        let _ = writeln!(writer, "{message}");
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
