//! Parallel processing strategies

use rayon::prelude::*;
use tracing::warn;

/// Processing mode for grid evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingMode {
    /// Single-threaded processing
    Sequential,
    /// Parallel processing on the global rayon pool
    #[default]
    Parallel,
    /// Parallel with a dedicated pool of the given number of threads
    ParallelWith(usize),
}

/// Strategy for parallel execution
pub trait ParallelStrategy {
    /// Execute a function over indices in parallel
    fn par_for_each<F>(&self, range: std::ops::Range<usize>, f: F)
    where
        F: Fn(usize) + Sync + Send;

    /// Map a function over indices and collect results in index order
    fn par_map<T, F>(&self, range: std::ops::Range<usize>, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send;
}

/// Evaluates a `rows x cols` cell generator into a row-major buffer.
///
/// Implementations decide how the grid is partitioned. Every cell is
/// produced exactly once and cells never observe each other, so any
/// partitioning is safe without synchronization.
pub trait GridEvaluator {
    fn evaluate<T, F>(&self, rows: usize, cols: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize, usize) -> T + Sync + Send;
}

impl ProcessingMode {
    /// Run `job` inside a dedicated pool, or on the global pool if the
    /// dedicated one cannot be built.
    fn with_pool<R, J>(threads: usize, job: J) -> R
    where
        R: Send,
        J: FnOnce() -> R + Send,
    {
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(job),
            Err(e) => {
                warn!(threads, error = %e, "failed to build thread pool, using global pool");
                job()
            }
        }
    }
}

impl ParallelStrategy for ProcessingMode {
    fn par_for_each<F>(&self, range: std::ops::Range<usize>, f: F)
    where
        F: Fn(usize) + Sync + Send,
    {
        match self {
            ProcessingMode::Sequential => range.for_each(f),
            ProcessingMode::Parallel => range.into_par_iter().for_each(f),
            ProcessingMode::ParallelWith(threads) => {
                Self::with_pool(*threads, || range.into_par_iter().for_each(f))
            }
        }
    }

    fn par_map<T, F>(&self, range: std::ops::Range<usize>, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        match self {
            ProcessingMode::Sequential => range.map(f).collect(),
            ProcessingMode::Parallel => range.into_par_iter().map(f).collect(),
            ProcessingMode::ParallelWith(threads) => {
                Self::with_pool(*threads, || range.into_par_iter().map(f).collect())
            }
        }
    }
}

impl GridEvaluator for ProcessingMode {
    /// Row-band partitioning: one task per row.
    fn evaluate<T, F>(&self, rows: usize, cols: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize, usize) -> T + Sync + Send,
    {
        let bands: Vec<Vec<T>> = self.par_map(0..rows, |row| {
            (0..cols).map(|col| f(row, col)).collect()
        });

        let mut out = Vec::with_capacity(rows * cols);
        for band in bands {
            out.extend(band);
        }
        out
    }
}

/// Get the number of available CPU cores
pub fn num_cpus() -> usize {
    rayon::current_num_threads()
}

/// Configure the global thread pool
pub fn set_num_threads(threads: usize) {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok(); // Ignore if already initialized
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_default_is_parallel() {
        assert_eq!(ProcessingMode::default(), ProcessingMode::Parallel);
    }

    #[test]
    fn test_par_map_preserves_order() {
        for mode in [
            ProcessingMode::Sequential,
            ProcessingMode::Parallel,
            ProcessingMode::ParallelWith(2),
        ] {
            let squares = mode.par_map(0..100, |i| i * i);
            assert_eq!(squares.len(), 100);
            assert!(squares.iter().enumerate().all(|(i, &v)| v == i * i));
        }
    }

    #[test]
    fn test_par_for_each_visits_all() {
        let counter = AtomicUsize::new(0);
        ProcessingMode::Parallel.par_for_each(0..1000, |_| {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(counter.load(Ordering::Relaxed), 1000);
    }

    #[test]
    fn test_num_cpus() {
        assert!(num_cpus() >= 1);
    }

    #[test]
    fn test_dedicated_pool_size() {
        let threads = ProcessingMode::with_pool(3, rayon::current_num_threads);
        assert_eq!(threads, 3);
    }

    #[test]
    fn test_evaluate_row_major() {
        let out = ProcessingMode::Parallel.evaluate(3, 4, |row, col| row * 10 + col);
        assert_eq!(out, vec![0, 1, 2, 3, 10, 11, 12, 13, 20, 21, 22, 23]);
    }

    #[test]
    fn test_evaluate_empty_grid() {
        let out: Vec<u8> = ProcessingMode::Sequential.evaluate(0, 5, |_, _| 1);
        assert!(out.is_empty());
        let out: Vec<u8> = ProcessingMode::Parallel.evaluate(5, 0, |_, _| 1);
        assert!(out.is_empty());
    }
}
