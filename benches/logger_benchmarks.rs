//! Criterion benchmarks for fyz_log

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fyz_log::core::{build_tag, render};
use fyz_log::prelude::*;

/// Sink that discards everything, so only facade overhead is measured
struct NullSink;

impl PlatformSink for NullSink {
    fn v(&self, _tag: &str, _message: &str) -> Result<()> {
        Ok(())
    }
    fn d(&self, _tag: &str, _message: &str) -> Result<()> {
        Ok(())
    }
    fn i(&self, _tag: &str, _message: &str) -> Result<()> {
        Ok(())
    }
    fn w(&self, _tag: &str, _message: &str) -> Result<()> {
        Ok(())
    }
    fn e(&self, _tag: &str, _message: &str) -> Result<()> {
        Ok(())
    }
    fn wtf(&self, _tag: &str, _message: &str) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatter");
    group.throughput(Throughput::Elements(1));

    let args: Vec<FormatArg> = vec!["it".into(), 2357.into(), true.into(), "is".into()];
    let frame = CallerFrame::new("com.example.Widget", "draw");

    group.bench_function("render_plain", |b| {
        b.iter(|| render(black_box("the message"), &[]));
    });

    group.bench_function("render_four_args", |b| {
        b.iter(|| render(black_box("%s %d %b %s"), black_box(&args)));
    });

    group.bench_function("build_tag", |b| {
        b.iter(|| build_tag(black_box(&frame)));
    });

    group.finish();
}

// ============================================================================
// Routing Benchmarks
// ============================================================================

fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder().sink(NullSink).build();

    group.bench_function("emitted", |b| {
        b.iter(|| {
            logger.info(
                CallerFrame::new("bench::Routing", "emitted"),
                Some(black_box("value %d")),
                &[42.into()],
            )
        });
    });

    let filtered = Logger::builder()
        .threshold(Severity::Error)
        .sink(NullSink)
        .build();

    group.bench_function("filtered", |b| {
        b.iter(|| {
            filtered.debug(
                CallerFrame::new("bench::Routing", "filtered"),
                Some(black_box("value %d")),
                &[42.into()],
            )
        });
    });

    let writer = MemoryWriter::new();
    let stdout_mode = Logger::builder()
        .output_mode(OutputMode::StandardOutput)
        .writer(writer.clone())
        .build();

    group.bench_function("standard_output_mode", |b| {
        b.iter(|| {
            let result = stdout_mode.warn(
                CallerFrame::new("bench::Routing", "stdout"),
                Some(black_box("value %d")),
                &[42.into()],
            );
            writer.clear();
            result
        });
    });

    group.finish();
}

fn bench_caller_capture(c: &mut Criterion) {
    c.bench_function("caller_frame_macro", |b| {
        b.iter(|| black_box(fyz_log::caller_frame!()));
    });
}

criterion_group!(benches, bench_formatter, bench_routing, bench_caller_capture);
criterion_main!(benches);
