//! Fight loop benchmarks for arena_core.
//!
//! Run with: `cargo bench -p arena_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use arena_core::prelude::*;
use arena_test_utils::fixtures::line_roster;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Runs fight benchmarks for the arena_core crate.
pub fn fight_benchmark(c: &mut Criterion) {
    let config = FightConfig::new(25.0).with_round_limit(500);

    c.bench_function("run_fight_60_npcs", |b| {
        b.iter_batched(
            || line_roster(60, 10.0),
            |roster| {
                let mut events = EventDispatcher::new();
                black_box(run_fight(roster, &config, &mut events))
            },
            criterion::BatchSize::SmallInput,
        )
    });

    c.bench_function("resolve_all_pairs", |b| {
        b.iter(|| {
            for attacker in Species::ALL {
                for defender in Species::ALL {
                    black_box(resolve(black_box(attacker), black_box(defender)));
                }
            }
        })
    });
}

criterion_group!(benches, fight_benchmark);
criterion_main!(benches);
