//! Throughput benchmarks for the indicator processors and the frame engine.
//!
//! Run with: `cargo bench -p daily-ta`

#![allow(clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use daily_ta::indicators::{
    average_true_range, bollinger, exponential_moving_average, moving_average, rsi, stochastic_k,
    RsiEviction,
};
use daily_ta::{IndicatorEngine, IndicatorSet, PriceFrame};

/// Deterministic OHLCV data with every high above its low.
fn generate_ohlcv(size: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut open = Vec::with_capacity(size);
    let mut high = Vec::with_capacity(size);
    let mut low = Vec::with_capacity(size);
    let mut close = Vec::with_capacity(size);
    let mut volume = Vec::with_capacity(size);

    let mut price = 100.0;
    for i in 0..size {
        let x = i as f64;
        price += (x * 0.1).sin() * 2.0 + (x * 0.03).cos() * 1.5;
        price = price.max(10.0);

        let o = price + (x * 0.04).sin() * 0.3;
        let c = price + (x * 0.02).cos() * 0.5;
        open.push(o);
        close.push(c);
        high.push(o.max(c) + 1.0 + (x * 0.07).sin().abs());
        low.push(o.min(c) - 1.0 - (x * 0.05).cos().abs());
        volume.push(1_000_000.0 + (x * 0.9).sin().abs() * 500_000.0);
    }

    (open, high, low, close, volume)
}

const SIZES: &[usize] = &[100, 1_000, 10_000];

fn bench_moving_averages(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average");
    for &size in SIZES {
        let (_, _, _, close, _) = generate_ohlcv(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("simple", size), &close, |b, data| {
            b.iter(|| moving_average(black_box(data), black_box(20)));
        });
        group.bench_with_input(BenchmarkId::new("exponential", size), &close, |b, data| {
            b.iter(|| exponential_moving_average(black_box(data), black_box(20)));
        });
    }
    group.finish();
}

fn bench_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsi");
    for &size in SIZES {
        let (open, _, _, close, _) = generate_ohlcv(size);
        group.throughput(Throughput::Elements(size as u64));
        for eviction in [RsiEviction::MatchValue, RsiEviction::Tagged] {
            group.bench_with_input(
                BenchmarkId::new(format!("{eviction:?}"), size),
                &(open.clone(), close.clone()),
                |b, (o, c)| b.iter(|| rsi(black_box(o), black_box(c), black_box(14), eviction)),
            );
        }
    }
    group.finish();
}

fn bench_ranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");
    for &size in SIZES {
        let (_, high, low, close, _) = generate_ohlcv(size);
        group.throughput(Throughput::Elements(size as u64));
        let input = (high, low, close);
        group.bench_with_input(BenchmarkId::new("atr", size), &input, |b, (h, l, c)| {
            b.iter(|| average_true_range(black_box(h), black_box(l), black_box(c), black_box(14)));
        });
        group.bench_with_input(BenchmarkId::new("stochastic_k", size), &input, |b, (h, l, c)| {
            b.iter(|| stochastic_k(black_box(h), black_box(l), black_box(c), black_box(14)));
        });
    }
    group.finish();
}

fn bench_bollinger(c: &mut Criterion) {
    let mut group = c.benchmark_group("bollinger");
    for &size in SIZES {
        let (_, _, _, close, _) = generate_ohlcv(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &close, |b, data| {
            b.iter(|| bollinger(black_box(data), black_box(20)));
        });
    }
    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let set = IndicatorSet {
        daily_relative_change: true,
        moving_average: vec![5, 20, 50],
        exponential_moving_average: vec![12, 26],
        average_true_range: vec![14],
        rsi: vec![14],
        stochastic_k: vec![14],
        stochastic_d: vec![3],
        disparity: vec![20],
        macd: vec![(12, 26)],
        bollinger: vec![20],
        obv: true,
        obv_stddev: vec![20],
        ..IndicatorSet::default()
    };
    let engine = IndicatorEngine::new("BENCH");

    let mut group = c.benchmark_group("engine_apply");
    for &size in SIZES {
        let (open, high, low, close, volume) = generate_ohlcv(size);
        let dates: Vec<usize> = (0..size).collect();
        let mut frame = PriceFrame::new(dates);
        for (name, values) in [
            ("Open", open),
            ("High", high),
            ("Low", low),
            ("Close", close),
            ("Volume", volume),
        ] {
            frame
                .insert_column(name, values.into_iter().map(Some).collect())
                .expect("benchmark frame");
        }

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &frame, |b, frame| {
            b.iter(|| {
                let mut frame = frame.clone();
                engine.apply(black_box(&mut frame), &set)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_moving_averages,
    bench_rsi,
    bench_ranges,
    bench_bollinger,
    bench_engine,
);

criterion_main!(benches);
