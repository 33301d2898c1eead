use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Auto);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

/// For inputs where a single iteration takes milliseconds.
pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn rng_for(salt: u64) -> StdRng {
    StdRng::seed_from_u64(mix_seed(RNG_SEED ^ salt))
}

#[inline]
pub fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Input shapes that separate the sorting algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pattern {
    RandomUniform,
    Ascending,
    Descending,
    AllEqual,
    FewUnique,
    NearlySorted1pctSwaps,
}

pub const ALL_PATTERNS: [Pattern; 6] = [
    Pattern::RandomUniform,
    Pattern::Ascending,
    Pattern::Descending,
    Pattern::AllEqual,
    Pattern::FewUnique,
    Pattern::NearlySorted1pctSwaps,
];

impl Pattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::AllEqual => "all_equal",
            Self::FewUnique => "few_unique",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        }
    }

    pub fn generate<R: Rng>(self, rng: &mut R, size: usize) -> Vec<u64> {
        match self {
            Self::RandomUniform => (0..size).map(|_| rng.random::<u64>()).collect(),
            Self::Ascending => (0..size as u64).collect(),
            Self::Descending => (0..size as u64).rev().collect(),
            Self::AllEqual => vec![42; size],
            Self::FewUnique => (0..size).map(|_| rng.random_range(0..8_u64)).collect(),
            Self::NearlySorted1pctSwaps => {
                let mut data: Vec<u64> = (0..size as u64).collect();
                if size > 0 {
                    let swaps = (size / 100).max(1);
                    for _ in 0..swaps {
                        let a = rng.random_range(0..size);
                        let b = rng.random_range(0..size);
                        data.swap(a, b);
                    }
                }
                data
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_have_requested_size() {
        let mut rng = default_rng();
        for pattern in ALL_PATTERNS {
            for size in [0_usize, 1, 17, 1000] {
                assert_eq!(pattern.generate(&mut rng, size).len(), size, "{}", pattern.label());
            }
        }
    }

    #[test]
    fn nearly_sorted_is_a_permutation() {
        let mut data = Pattern::NearlySorted1pctSwaps.generate(&mut rng_for(7), 500);
        data.sort_unstable();
        assert!(data.iter().copied().eq(0..500));
    }
}
