//! In-place quicksort that forks both halves of a partition onto a rayon
//! pool until a depth budget of `ceil(log2(concurrency))` is spent, then
//! finishes each subtree sequentially.

mod config;
mod driver;
mod error;
mod partition;

use log::debug;

pub use config::{MAX_FORK_DEPTH, Scheduler, SequentialFallback, SortConfig, fork_depth};
pub use driver::{SortStats, quicksort_sequential};
pub use error::SortError;
pub use partition::{partition, partition_slice};

use driver::Probe;

/// Sorts `data[..len]` in non-decreasing order using up to `concurrency`
/// threads. A `concurrency` of `0` or `1` sorts on the calling thread.
pub fn sort<T: Ord + Send>(
    data: &mut [T],
    len: usize,
    concurrency: usize,
) -> Result<(), SortError> {
    let capacity = data.len();
    let data = data
        .get_mut(..len)
        .ok_or(SortError::LengthOutOfBounds { len, capacity })?;
    ParallelQuicksort::new(SortConfig::with_concurrency(concurrency)).sort(data)
}

pub fn sort_with_config<T: Ord + Send>(
    data: &mut [T],
    config: &SortConfig,
) -> Result<(), SortError> {
    ParallelQuicksort::new(*config).sort(data)
}

/// Sorts the inclusive range `data[low..=high]` with `remaining_depth` fork
/// levels on the current rayon pool. `low >= high` is a no-op. Depths past
/// [`MAX_FORK_DEPTH`] are treated as [`MAX_FORK_DEPTH`].
///
/// # Panics
///
/// Panics if `low < high` and `high` is out of bounds.
pub fn parallel_sort<T: Ord + Send>(
    data: &mut [T],
    low: usize,
    high: usize,
    remaining_depth: u32,
) {
    if low >= high {
        return;
    }
    assert!(
        high < data.len(),
        "sort range out of bounds: high={high} len={}",
        data.len()
    );
    let probe = Probe::default();
    driver::parallel_sort(
        &mut data[low..=high],
        remaining_depth.min(MAX_FORK_DEPTH),
        SequentialFallback::default(),
        &probe,
    );
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ParallelQuicksort {
    config: SortConfig,
}

impl ParallelQuicksort {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    pub fn sort<T: Ord + Send>(&self, data: &mut [T]) -> Result<(), SortError> {
        self.sort_with_stats(data).map(|_| ())
    }

    pub fn sort_with_stats<T: Ord + Send>(&self, data: &mut [T]) -> Result<SortStats, SortError> {
        let SortConfig {
            concurrency,
            fallback,
            scheduler,
        } = self.config;
        let depth = fork_depth(concurrency);
        debug!(
            "sort len={} concurrency={concurrency} depth={depth} fallback={fallback:?} scheduler={scheduler:?}",
            data.len()
        );

        let probe = Probe::default();
        if depth == 0 || data.len() < 2 {
            driver::parallel_sort(data, 0, fallback, &probe);
        } else {
            match scheduler {
                Scheduler::DedicatedPool => {
                    let pool = rayon::ThreadPoolBuilder::new()
                        .num_threads(config::pool_threads(concurrency, data.len()))
                        .thread_name(|index| format!("fork-sort-{index}"))
                        .build()?;
                    pool.install(|| driver::parallel_sort(data, depth, fallback, &probe));
                }
                Scheduler::Current => driver::parallel_sort(data, depth, fallback, &probe),
            }
        }

        let stats = probe.finish(depth);
        debug!(
            "sorted forks={} sequential_runs={}",
            stats.forks, stats.sequential_runs
        );
        Ok(stats)
    }
}
