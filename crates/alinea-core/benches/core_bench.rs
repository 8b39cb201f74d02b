//! Criterion benchmarks for alinea-core spectral primitives
//!
//! Run with: cargo bench -p alinea-core
#![allow(missing_docs)]

use alinea_core::{Complex, Fid, PhaseFreqShift, fft};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::f64::consts::PI;

const SIZES: &[usize] = &[1024, 2048, 4096];
const DWELL_S: f64 = 5e-4;

fn synthetic_fid(n: usize) -> Fid {
    let reference_hz = 127.7e6;
    let time_s: Vec<f64> = (0..n).map(|i| i as f64 * DWELL_S).collect();
    let samples: Vec<Complex<f64>> = time_s
        .iter()
        .map(|&t| Complex::from_polar((-t / 0.05).exp(), 2.0 * PI * 40.0 * t))
        .collect();
    let ppm: Vec<f64> = (0..n)
        .map(|i| {
            let offset_hz = (i as f64 - n as f64 / 2.0) / (n as f64 * DWELL_S);
            4.7 + offset_hz / (reference_hz * 1e-6)
        })
        .collect();
    Fid::new(samples, time_s, ppm, reference_hz).unwrap()
}

fn bench_spectrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectrum");

    for &n in SIZES {
        let fid = synthetic_fid(n);
        group.bench_with_input(BenchmarkId::new("centered", n), &n, |b, _| {
            b.iter(|| black_box(fid.spectrum()));
        });
    }

    group.finish();
}

fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift");

    for &n in SIZES {
        let fid = synthetic_fid(n);
        let shift = PhaseFreqShift::new(3.0, 10.0);
        group.bench_with_input(BenchmarkId::new("apply", n), &n, |b, _| {
            b.iter(|| black_box(fid.shifted(black_box(shift))));
        });
    }

    group.finish();
}

fn bench_fftshift(c: &mut Criterion) {
    let buffer: Vec<Complex<f64>> = (0..4096)
        .map(|i| Complex::new(i as f64, -(i as f64)))
        .collect();

    c.bench_function("fftshift_4096", |b| {
        b.iter(|| black_box(fft::fftshift(black_box(&buffer))));
    });
}

criterion_group!(benches, bench_spectrum, bench_shift, bench_fftshift);
criterion_main!(benches);
