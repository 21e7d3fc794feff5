// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! splits-core: Named wall-clock timers for ad hoc profiling.
//!
//! This crate provides the [`Stopwatch`] engine: start and stop timers by
//! name, collect one immutable [`Record`] per completed measurement, and
//! report the accumulated records through pluggable report functions. The
//! time source and the output sink are injected, so the engine itself never
//! touches a clock or a logging facility directly.
//!
//! ```no_run
//! use splits_core::Stopwatch;
//!
//! let mut sw = Stopwatch::new();
//! sw.start("parse");
//! // ... work being measured ...
//! sw.stop("parse");
//! sw.report();
//! ```

pub mod clock;
pub mod detect;
pub mod error;
pub mod record;
pub mod report;
pub mod sink;
pub mod stopwatch;

pub use clock::{Clock, MonotonicClock, WallClock};
pub use error::Error;
pub use record::Record;
pub use report::{LineReportFn, ReportFn};
pub use sink::{NullSink, Sink, StderrSink, TracingSink, WriterSink};
pub use stopwatch::Stopwatch;
