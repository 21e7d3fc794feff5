// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for stopwatch bookkeeping overhead.

use criterion::{criterion_group, criterion_main, Criterion};
use splits_core::report::render_lines;
use splits_core::{MonotonicClock, NullSink, Record, Stopwatch};

fn timing(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing");

    group.bench_function("start_stop_pair", |b| {
        let mut sw = Stopwatch::with_clock_and_sink(MonotonicClock::new(), NullSink);
        b.iter(|| {
            sw.start("bench");
            sw.stop("bench");
            sw.reset_log();
        })
    });

    group.bench_function("measure_closure", |b| {
        let mut sw = Stopwatch::with_clock_and_sink(MonotonicClock::new(), NullSink);
        b.iter(|| {
            let value = sw.measure("bench", || 42);
            sw.reset_log();
            value
        })
    });

    group.finish();
}

fn reporting(c: &mut Criterion) {
    let mut group = c.benchmark_group("reporting");

    let record = Record::new("render", 0.0, 1234.5678);
    group.bench_function("record_display", |b| b.iter(|| record.to_string()));

    let mut sw = Stopwatch::with_clock_and_sink(MonotonicClock::new(), NullSink);
    for i in 0..100 {
        let name = format!("timer-{i}");
        sw.start(&name);
        sw.stop(&name);
    }

    group.bench_function("render_lines_100", |b| b.iter(|| render_lines(sw.log())));
    group.bench_function("report_100", |b| b.iter(|| sw.report()));

    group.finish();
}

criterion_group!(benches, timing, reporting);
criterion_main!(benches);
