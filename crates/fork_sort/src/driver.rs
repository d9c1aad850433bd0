use std::sync::atomic::{AtomicUsize, Ordering};

use log::trace;

use crate::config::SequentialFallback;
use crate::partition::partition_slice;

/// Counters collected over one sort call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    /// Fork levels the call started with.
    pub fork_depth: u32,
    /// Ranges whose halves were sorted by two concurrent tasks.
    pub forks: usize,
    /// Ranges handed to the sequential fallback.
    pub sequential_runs: usize,
}

#[derive(Debug, Default)]
pub(crate) struct Probe {
    forks: AtomicUsize,
    sequential_runs: AtomicUsize,
}

impl Probe {
    pub(crate) fn finish(self, fork_depth: u32) -> SortStats {
        SortStats {
            fork_depth,
            forks: self.forks.into_inner(),
            sequential_runs: self.sequential_runs.into_inner(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Step {
    Fork { child_depth: u32 },
    Sequential,
}

impl Step {
    #[inline]
    fn after(remaining_depth: u32) -> Self {
        match remaining_depth {
            0 => Self::Sequential,
            depth => Self::Fork {
                child_depth: depth - 1,
            },
        }
    }
}

pub(crate) fn parallel_sort<T: Ord + Send>(
    data: &mut [T],
    remaining_depth: u32,
    fallback: SequentialFallback,
    probe: &Probe,
) {
    if data.len() < 2 {
        return;
    }

    let len = data.len();
    let pivot = partition_slice(data);
    let (left, rest) = data.split_at_mut(pivot);
    let right = &mut rest[1..];

    match Step::after(remaining_depth) {
        Step::Fork { child_depth } => {
            probe.forks.fetch_add(1, Ordering::Relaxed);
            trace!("fork len={len} pivot={pivot} child_depth={child_depth}");
            rayon::join(
                || parallel_sort(left, child_depth, fallback, probe),
                || parallel_sort(right, child_depth, fallback, probe),
            );
        }
        Step::Sequential => {
            probe.sequential_runs.fetch_add(1, Ordering::Relaxed);
            trace!("sequential len={len} pivot={pivot} fallback={fallback:?}");
            sequential_sort(left, fallback);
            sequential_sort(right, fallback);
        }
    }
}

#[inline]
pub(crate) fn sequential_sort<T: Ord>(data: &mut [T], fallback: SequentialFallback) {
    match fallback {
        SequentialFallback::Quicksort => quicksort_sequential(data),
        SequentialFallback::StdUnstable => data.sort_unstable(),
    }
}

/// Single-threaded last-element quicksort.
///
/// Recurses into the smaller side and loops on the larger one, so the stack
/// stays logarithmic even on already sorted input.
pub fn quicksort_sequential<T: Ord>(mut data: &mut [T]) {
    while data.len() > 1 {
        let pivot = partition_slice(data);
        let (left, rest) = data.split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quicksort_sequential(left);
            data = right;
        } else {
            quicksort_sequential(right);
            data = left;
        }
    }
}
