use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn uniform_i32<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.random::<i32>()).collect()
}

/// Coefficients of `x[i] = (a * x[i - 1] + b * x[i - 2] + c) % m`.
#[derive(Clone, Copy, Debug)]
pub struct Recurrence {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub m: i64,
}

pub const DEFAULT_RECURRENCE: Recurrence = Recurrence {
    a: 1_103_515_245,
    b: 12_345,
    c: 2_531_011,
    m: 1 << 31,
};

/// Extends `seeds` to `len` values with the second-order recurrence.
///
/// Needs at least two seeds once `len` goes past them.
pub fn recurrence_i32(len: usize, seeds: &[i32], rec: Recurrence) -> Vec<i32> {
    let mut data = Vec::with_capacity(len);
    data.extend(seeds.iter().copied().take(len));
    assert!(
        data.len() == len || data.len() >= 2,
        "recurrence needs two seeds, got {}",
        data.len()
    );

    for i in data.len()..len {
        let next =
            (rec.a * i64::from(data[i - 1]) + rec.b * i64::from(data[i - 2]) + rec.c) % rec.m;
        data.push(next as i32);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recurrence_known_prefix() {
        let rec = Recurrence {
            a: 2,
            b: 3,
            c: 1,
            m: 100,
        };
        // 2*5 + 3*1 + 1 = 14, 2*14 + 3*5 + 1 = 44, 2*44 + 3*14 + 1 = 131 % 100 = 31
        assert_eq!(recurrence_i32(5, &[1, 5], rec), [1, 5, 14, 44, 31]);
        assert_eq!(recurrence_i32(1, &[1, 5], rec), [1]);
    }

    #[test]
    fn recurrence_stays_below_modulus() {
        let data = recurrence_i32(10_000, &[17, 42], DEFAULT_RECURRENCE);
        assert_eq!(data.len(), 10_000);
        assert!(data.iter().all(|&x| (0..=i32::MAX).contains(&x)));
    }
}
