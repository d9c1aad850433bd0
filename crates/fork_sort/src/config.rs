use std::num::NonZeroUsize;
use std::thread;

/// How a range is sorted once the fork budget is spent.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SequentialFallback {
    /// Last-element Lomuto quicksort, the same partitioning as the forked levels.
    #[default]
    Quicksort,
    /// `slice::sort_unstable`.
    StdUnstable,
}

/// Where forked halves run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Scheduler {
    /// A rayon pool with `concurrency` threads, built for one call and dropped after it.
    #[default]
    DedicatedPool,
    /// Whatever rayon pool the caller is running in (the global one by default).
    Current,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortConfig {
    pub concurrency: usize,
    pub fallback: SequentialFallback,
    pub scheduler: Scheduler,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            fallback: SequentialFallback::default(),
            scheduler: Scheduler::default(),
        }
    }
}

impl SortConfig {
    pub fn with_concurrency(concurrency: usize) -> Self {
        Self {
            concurrency,
            ..Self::default()
        }
    }

    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn fallback(mut self, fallback: SequentialFallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn scheduler(mut self, scheduler: Scheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Fork levels allowed for this configuration, see [`fork_depth`].
    #[inline]
    pub fn fork_depth(&self) -> u32 {
        fork_depth(self.concurrency)
    }
}

/// Upper bound of [`fork_depth`] over every `usize` concurrency level.
pub const MAX_FORK_DEPTH: u32 = usize::BITS;

/// Smallest `d` with `2^d >= concurrency`; `0` and `1` both give `0`.
#[inline]
pub fn fork_depth(concurrency: usize) -> u32 {
    if concurrency <= 1 {
        0
    } else {
        usize::BITS - (concurrency - 1).leading_zeros()
    }
}

/// Threads for a dedicated pool: no more than there are elements to sort.
#[inline]
pub(crate) fn pool_threads(concurrency: usize, len: usize) -> usize {
    concurrency.min(len).max(1)
}

fn default_concurrency() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
