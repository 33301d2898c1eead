use std::hint::black_box;
use std::time::Duration;

use bench::{ALL_PATTERNS, Pattern};
use classic_sort::{SortAlgorithm, SortContext, algorithm_name, all_algorithms, sort_with_ctx_by};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const BENCH_SIZES: [usize; 3] = [1024, 8192, 65536];
const QUADRATIC_SIZE_LIMIT: usize = 8192;

fn bench_sort(c: &mut Criterion) {
    for pattern in ALL_PATTERNS {
        let mut group = c.benchmark_group(format!("sort/{}", pattern.label()));

        for &size in &BENCH_SIZES {
            if size <= QUADRATIC_SIZE_LIMIT {
                bench::apply_small_runtime_config(&mut group);
            } else {
                bench::apply_large_runtime_config(&mut group);
            }

            let base = pattern.generate(&mut bench::rng_for(size as u64), size);

            for &algo in all_algorithms() {
                if !is_benchmark_target(algo, pattern, size) {
                    continue;
                }
                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        let mut ctx = SortContext::default();
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = std::time::Instant::now();
                            let res = sort_with_ctx_by(algo, &mut data, &mut ctx, |a, b| a < b);
                            total += start.elapsed();
                            black_box((&data, res));
                        }
                        total
                    });
                });
            }

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = std::time::Instant::now();
                        data.sort_unstable();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });

            group.bench_function(BenchmarkId::new("std_stable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = std::time::Instant::now();
                        data.sort();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select/random_uniform");
    bench::apply_small_runtime_config(&mut group);

    for &size in &BENCH_SIZES {
        let base = Pattern::RandomUniform.generate(&mut bench::rng_for(size as u64), size);
        group.bench_function(BenchmarkId::new("quick_select_median", size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let mut data = base.clone();
                    let start = std::time::Instant::now();
                    let picked = classic_sort::quick_select(&mut data, size / 2 + 1).copied();
                    total += start.elapsed();
                    black_box(picked);
                }
                total
            });
        });
        group.bench_function(BenchmarkId::new("std_select_nth_unstable", size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let mut data = base.clone();
                    let start = std::time::Instant::now();
                    let picked = *data.select_nth_unstable(size / 2).1;
                    total += start.elapsed();
                    black_box(picked);
                }
                total
            });
        });
    }

    group.finish();
}

/// Skips the quadratic cases that would dominate the run.
#[inline]
fn is_benchmark_target(algo: SortAlgorithm, pattern: Pattern, size: usize) -> bool {
    if size <= QUADRATIC_SIZE_LIMIT {
        return true;
    }
    match algo {
        SortAlgorithm::InsertionSort => matches!(pattern, Pattern::Ascending | Pattern::AllEqual),
        SortAlgorithm::QuickSortFirstPivot => matches!(
            pattern,
            Pattern::RandomUniform | Pattern::AllEqual | Pattern::FewUnique
        ),
        _ => true,
    }
}

criterion_group!(benches, bench_sort, bench_select);
criterion_main!(benches);
