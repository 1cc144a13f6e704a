//! Benchmarks for gate sequence tracking
//!
//! Run with: cargo bench -p bloch-core

use bloch_core::tracker::logical_count;
use bloch_core::{AngleChoice, GateToken, Session};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_logical_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("logical_count");

    group.bench_function("full_display", |b| {
        b.iter(|| logical_count(black_box("RXSDTDHXYZRZ")));
    });

    group.bench_function("long_display", |b| {
        let display = "RXSDTDH".repeat(100);
        b.iter(|| logical_count(black_box(&display)));
    });

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    group.bench_function("fill_and_clear", |b| {
        let mut session = Session::default();
        b.iter(|| {
            for token in GateToken::ALL {
                let _ = session.press(black_box(token)).unwrap();
                if session.pending().is_some() {
                    session.choose_angle(AngleChoice::HalfPi).unwrap();
                }
            }
            session.clear().unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_logical_count, bench_session);
criterion_main!(benches);
