//! Benchmarks for Bloch circuit operations
//!
//! Run with: cargo bench -p bloch-ir

use bloch_ir::{Circuit, GateKind};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::f64::consts::PI;

/// Benchmark adding gates to a circuit
fn bench_gate_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_addition");

    group.bench_function("h_gate", |b| {
        let mut circuit = Circuit::new();
        b.iter(|| {
            circuit.h().unwrap();
        });
    });

    group.bench_function("rx_gate", |b| {
        let mut circuit = Circuit::new();
        b.iter(|| {
            circuit.rx(black_box(PI / 4.0)).unwrap();
        });
    });

    group.bench_function("apply_dispatch", |b| {
        let mut circuit = Circuit::new();
        b.iter(|| {
            circuit
                .apply(black_box(GateKind::Rz), black_box(Some(PI)))
                .unwrap();
        });
    });

    group.finish();
}

/// Benchmark building and resetting full sequences
fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");

    for len in &[10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("build_reset", len), len, |b, &n| {
            let mut circuit = Circuit::new();
            b.iter(|| {
                for i in 0..n {
                    let kind = GateKind::ALL[i % GateKind::ALL.len()];
                    let angle = kind.is_rotation().then_some(PI / 2.0);
                    circuit.apply(kind, angle).unwrap();
                }
                circuit.reset();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gate_addition, bench_sequence);
criterion_main!(benches);
