use std::collections::HashMap;
use std::hint::black_box;

use assoc_array::AssocArray;
use criterion::AxisScale;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

const SIZES: &[usize] = &[4, 16, 64, 256, 1024];

fn shuffled_keys(n: usize) -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(0xA55C_AA11);
    let mut keys: Vec<String> = (0..n).map(|i| format!("key_{i:08}")).collect();
    keys.shuffle(&mut rng);
    keys
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &n in SIZES {
        let keys = shuffled_keys(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("assoc_array", n), &keys, |b, keys| {
            b.iter(|| {
                let mut map = AssocArray::new();
                for key in keys {
                    map.set(key.clone(), black_box(1u64)).unwrap();
                }
                black_box(map.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("std_hash_map", n), &keys, |b, keys| {
            b.iter(|| {
                let mut map = HashMap::new();
                for key in keys {
                    map.insert(key.clone(), black_box(1u64));
                }
                black_box(map.len())
            });
        });
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &n in SIZES {
        let keys = shuffled_keys(n);
        group.throughput(Throughput::Elements(n as u64));

        let mut linear = AssocArray::new();
        let mut hashed = HashMap::new();
        for (i, key) in keys.iter().enumerate() {
            linear.set(key.clone(), i as u64).unwrap();
            hashed.insert(key.clone(), i as u64);
        }

        group.bench_with_input(BenchmarkId::new("assoc_array", n), &keys, |b, keys| {
            b.iter(|| {
                let mut sum = 0u64;
                for key in keys {
                    sum = sum.wrapping_add(*linear.get(black_box(key)).unwrap());
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("std_hash_map", n), &keys, |b, keys| {
            b.iter(|| {
                let mut sum = 0u64;
                for key in keys {
                    sum = sum.wrapping_add(*hashed.get(black_box(key)).unwrap());
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &n in SIZES {
        let keys = shuffled_keys(n);
        group.throughput(Throughput::Elements(n as u64));

        let mut linear = AssocArray::new();
        let mut hashed = HashMap::new();
        for (i, key) in keys.iter().enumerate() {
            linear.set(key.clone(), i as u64).unwrap();
            hashed.insert(key.clone(), i as u64);
        }

        group.bench_with_input(BenchmarkId::new("assoc_array", n), &keys, |b, keys| {
            b.iter_batched(
                || linear.clone(),
                |mut map| {
                    for key in keys {
                        black_box(map.remove(black_box(key)));
                    }
                    black_box(map.len())
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("std_hash_map", n), &keys, |b, keys| {
            b.iter_batched(
                || hashed.clone(),
                |mut map| {
                    for key in keys {
                        black_box(map.remove(black_box(key)));
                    }
                    black_box(map.len())
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_get, bench_remove);
criterion_main!(benches);
