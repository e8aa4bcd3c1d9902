// ============================================================================
// Pi Spigot Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Primitives - Derived arithmetic on the emulated machine
// 2. Backend Comparison - Full spigot runs, emulated vs native
// 3. Reference - The native reference implementation
//
// The emulated backend costs roughly one primitive step per unit of operand
// magnitude, so its digit counts are kept small.
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pi_spigot::numeric::primitive;
use pi_spigot::prelude::*;
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Primitive Benchmarks
// ============================================================================

fn benchmark_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    for magnitude in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("multiply", magnitude),
            magnitude,
            |b, &m| b.iter(|| black_box(primitive::multiply(black_box(m), 7))),
        );
        group.bench_with_input(
            BenchmarkId::new("divide", magnitude),
            magnitude,
            |b, &m| b.iter(|| black_box(primitive::divide(black_box(m * 7), 7))),
        );
        group.bench_with_input(
            BenchmarkId::new("modulus", magnitude),
            magnitude,
            |b, &m| b.iter(|| black_box(primitive::modulus(black_box(m * 7 + 3), 7))),
        );
    }

    group.finish();
}

// ============================================================================
// Backend Comparison
// ============================================================================

fn run_spigot(digit_count: usize, arithmetic: ArithmeticType) -> usize {
    let config = SpigotConfig::new(digit_count, arithmetic);
    match create_from_config(config, Arc::new(NoOpEventHandler)) {
        Ok(computation) => computation.count(),
        Err(_) => 0,
    }
}

fn benchmark_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("spigot");
    group.sample_size(10);

    for digit_count in [10, 25, 50].iter() {
        group.bench_with_input(
            BenchmarkId::new("Emulated", digit_count),
            digit_count,
            |b, &n| b.iter(|| black_box(run_spigot(n, ArithmeticType::Emulated))),
        );
        group.bench_with_input(
            BenchmarkId::new("Native", digit_count),
            digit_count,
            |b, &n| b.iter(|| black_box(run_spigot(n, ArithmeticType::Native))),
        );
    }

    group.finish();
}

// ============================================================================
// Reference Benchmarks
// ============================================================================

fn benchmark_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference");

    for digit_count in [100, 500, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(digit_count),
            digit_count,
            |b, &n| b.iter(|| black_box(reference_digits(n, CarryResetPolicy::ResetBoth))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_primitives,
    benchmark_backends,
    benchmark_reference
);
criterion_main!(benches);
