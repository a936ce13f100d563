use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gorilla::{decode, encode, EncodeOptions, Point};

/// Generate a realistic time-series dataset: constant 60s interval, slowly varying values.
fn generate_data(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = 1_609_459_200 + (i as i64) * 60;
            let v = 20.0 + 5.0 * ((i as f64) * 0.01).sin() + (i as f64) * 0.001;
            Point::new(t, v)
        })
        .collect()
}

/// Generate a dataset where every value is identical (best-case compression).
fn generate_constant_data(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(1_609_459_200 + (i as i64) * 60, 42.0))
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [100, 1_000, 10_000, 100_000] {
        let data = generate_data(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("varying", size), &data, |b, data| {
            b.iter(|| black_box(encode(black_box(data), EncodeOptions::default()).unwrap()));
        });
    }

    for size in [100, 1_000, 10_000, 100_000] {
        let data = generate_constant_data(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("constant", size), &data, |b, data| {
            b.iter(|| black_box(encode(black_box(data), EncodeOptions::default()).unwrap()));
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [100, 1_000, 10_000, 100_000] {
        let data = generate_data(size);
        let block = encode(&data, EncodeOptions::default()).unwrap();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("varying", size), &block, |b, block| {
            b.iter(|| black_box(decode(black_box(block)).unwrap()));
        });
    }

    for size in [100, 1_000, 10_000, 100_000] {
        let data = generate_constant_data(size);
        let block = encode(&data, EncodeOptions::default()).unwrap();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("constant", size), &block, |b, block| {
            b.iter(|| black_box(decode(black_box(block)).unwrap()));
        });
    }

    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    for size in [1_000, 10_000, 100_000] {
        let data = generate_data(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("varying", size), &data, |b, data| {
            b.iter(|| {
                let block = encode(black_box(data), EncodeOptions::default()).unwrap();
                black_box(decode(&block).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_roundtrip);
criterion_main!(benches);
