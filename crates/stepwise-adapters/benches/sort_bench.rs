//! Benchmarks for the sorting engines.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use stepwise_adapters::plugins::SortAlgorithm;
use stepwise_common::step::{Step, StepEmitter};
use stepwise_common::types::Value;

fn generate_values(count: usize, max: Value, seed: u64) -> Vec<Value> {
    // Simple deterministic pseudo-random generator
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 33) % max as u64) as Value
        })
        .collect()
}

fn bench_sorts_unobserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_unobserved");

    for size in [100, 1_000] {
        let input = generate_values(size, 1_000, 42);
        for algorithm in SortAlgorithm::ALL {
            if size > 100 && matches!(algorithm, SortAlgorithm::Bubble | SortAlgorithm::Selection) {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &input, |b, input| {
                b.iter(|| {
                    let mut values = input.clone();
                    algorithm
                        .sort(&mut values, &mut StepEmitter::new())
                        .unwrap();
                    black_box(values)
                });
            });
        }
    }

    group.finish();
}

fn bench_sorts_recorded(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_recorded");
    let input = generate_values(1_000, 1_000, 7);

    for algorithm in [
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Tim,
    ] {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| {
                let mut values = input.clone();
                let mut steps: Vec<Step> = Vec::new();
                {
                    let mut emitter = StepEmitter::new().with_observer(&mut steps);
                    algorithm.sort(&mut values, &mut emitter).unwrap();
                }
                black_box(steps.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sorts_unobserved, bench_sorts_recorded);
criterion_main!(benches);
