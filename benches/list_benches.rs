use mola_list::{ArenaList, LinkedList, List, SentinelList};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

// --- Head operations: O(1) on both representations ---

fn head_churn<L: List<u64> + Default>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("{}_head_churn", name));

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut list = L::default();
                for i in 0..size as u64 {
                    list.insert_start(i);
                }
                while !list.empty() {
                    list.remove_start();
                }
                black_box(list.size())
            });
        });
    }

    group.finish();
}

// --- Positional reads and lookups: O(n) walks ---

fn positional<L: List<u64> + FromIterator<u64>>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("{}_positional", name));

    for size in SIZES {
        let list: L = (0..size as u64).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let positions: Vec<isize> = (0..64)
            .map(|_| rng.random_range(0..size as isize))
            .collect();

        group.bench_function(BenchmarkId::new("get_at", size), |b| {
            b.iter(|| {
                for &j in &positions {
                    black_box(list.get_at(j));
                }
            });
        });

        group.bench_function(BenchmarkId::new("find", size), |b| {
            b.iter(|| {
                for &j in &positions {
                    black_box(list.find(&(j as u64)));
                }
            });
        });
    }

    group.finish();
}

// --- Mixed insert/remove at random positions ---

fn random_splice<L: List<u64> + FromIterator<u64>>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("{}_random_splice", name));

    for size in SIZES {
        group.throughput(Throughput::Elements(256));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter_with_setup(
                || {
                    let list: L = (0..size as u64).collect();
                    (list, StdRng::seed_from_u64(size as u64))
                },
                |(mut list, mut rng)| {
                    for i in 0..256u64 {
                        let j = rng.random_range(0..list.size() as isize);
                        if i % 2 == 0 {
                            list.insert_at(i, j);
                        } else {
                            list.remove_at(j);
                        }
                    }
                    black_box(list.size())
                },
            );
        });
    }

    group.finish();
}

fn linked_list_benches(c: &mut Criterion) {
    head_churn::<LinkedList<u64>>(c, "LinkedList");
    positional::<LinkedList<u64>>(c, "LinkedList");
    random_splice::<LinkedList<u64>>(c, "LinkedList");
}

fn arena_list_benches(c: &mut Criterion) {
    head_churn::<ArenaList<u64>>(c, "ArenaList");
    positional::<ArenaList<u64>>(c, "ArenaList");
    random_splice::<ArenaList<u64>>(c, "ArenaList");
}

criterion_group!(benches, linked_list_benches, arena_list_benches);
criterion_main!(benches);
