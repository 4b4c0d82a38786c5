//! Append-path benchmarks.

use caplog::{format_line, LogFile};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tempfile::TempDir;

/// Build a formatted line whose message pads out to roughly `size` bytes.
fn line_of(size: usize) -> String {
    let message = "m".repeat(size.saturating_sub(60));
    format_line("notice", &message)
}

/// Benchmark locked appends at several line sizes, rotation never firing.
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [64, 256, 1024, 4096].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let dir = TempDir::new().unwrap();
            let log = LogFile::new(dir.path().join("log.txt"), 0);
            let line = line_of(size);

            b.iter(|| {
                log.append(black_box(&line)).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark the full cycle at a small cap, so rotation fires constantly.
fn bench_append_with_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_with_rotation");
    group.sample_size(20);

    for cap in [4_096_u64, 65_536].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(cap), cap, |b, &cap| {
            let dir = TempDir::new().unwrap();
            let log = LogFile::new(dir.path().join("log.txt"), cap);
            let line = line_of(256);

            b.iter(|| {
                log.append(black_box(&line)).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark the size probe on an existing file.
fn bench_size_probe(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let log = LogFile::new(dir.path().join("log.txt"), 0);
    log.append(&line_of(1024)).unwrap();

    c.bench_function("current_size", |b| {
        b.iter(|| black_box(log.current_size()));
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_append_with_rotation,
    bench_size_probe
);
criterion_main!(benches);
