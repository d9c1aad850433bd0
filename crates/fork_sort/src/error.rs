/// Precondition failures reported at the entry points.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("length {len} exceeds the {capacity} elements provided")]
    LengthOutOfBounds { len: usize, capacity: usize },

    #[error("thread pool build failed -> {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
