#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use rayon::prelude::*;
use rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};
use std::sync::Arc;

/// Represents a thread pool wrapper.
pub struct ThreadPool {
    inner: RayonThreadPool,
}

impl ThreadPool {
    /// Creates a new instance of `ThreadPool`.
    pub fn new(num_threads: usize) -> Self {
        Self {
            inner: ThreadPoolBuilder::new().num_threads(num_threads).build().expect("cannot build a thread pool"),
        }
    }

    /// Executes given operation on thread pool.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.inner.install(op)
    }
}

/// Specifies how data parallel parts of the training are executed.
#[derive(Clone, Default)]
pub enum Parallelism {
    /// Everything runs on the calling thread.
    #[default]
    Sequential,
    /// Data parallel parts run on rayon: on the given pool or on the global one.
    Parallel {
        /// A dedicated thread pool.
        thread_pool: Option<Arc<ThreadPool>>,
    },
}

impl Parallelism {
    /// Creates a parallel mode backed by a dedicated pool with the given amount of threads.
    pub fn with_threads(num_threads: usize) -> Self {
        Self::Parallel { thread_pool: Some(Arc::new(ThreadPool::new(num_threads))) }
    }

    /// Returns true if data parallel operations are allowed.
    pub fn is_parallel(&self) -> bool {
        matches!(self, Self::Parallel { .. })
    }

    /// Executes given operation: installs a dedicated thread pool if there is one.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match self {
            Self::Parallel { thread_pool: Some(thread_pool) } => thread_pool.execute(op),
            _ => op(),
        }
    }

    /// Maps collection and collects results into vector, in parallel if allowed.
    pub fn collect<T, F, R>(&self, source: &[T], map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        if self.is_parallel() { source.par_iter().map(map_op).collect() } else { source.iter().map(map_op).collect() }
    }

    /// Performs mutable foreach over chunks of given size, in parallel if allowed.
    pub fn foreach_chunk_mut<T, F>(&self, source: &mut [T], chunk_size: usize, action: F)
    where
        T: Send + Sync,
        F: Fn(&mut [T]) + Send + Sync,
    {
        if self.is_parallel() {
            source.par_chunks_mut(chunk_size).for_each(action)
        } else {
            source.chunks_mut(chunk_size).for_each(action)
        }
    }
}
