//! Gaussian elimination with the row-reduction loop split across a rayon pool.
//!
//! For each pivot row `i`, the rows below it are disjoint mutable chunks of the
//! augmented buffer, so workers need no locking. `for_each` only returns once every
//! chunk is reduced, which is the barrier between consecutive pivot steps.

use std::sync::Arc;

use gauss_core::{DenseMatrix, GaussCoreError};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::elimination::{augment, back_substitute, check_pivot, finish, reduce_row};
use super::{EliminationMetadata, SolveAlgorithm, SolveResult, DEFAULT_PIVOT_TOLERANCE};

/// Parallel Gaussian elimination without pivoting.
#[derive(Debug, Clone)]
pub struct ParallelGaussianElimination {
    pub pivot_tolerance: f64,
    pub residual_tolerance: f64,
    pub verify_residual: bool,
    /// Minimum number of rows handed to one rayon task.
    pub min_rows_per_task: usize,
    threads: usize,
    pool: Arc<ThreadPool>,
}

impl ParallelGaussianElimination {
    /// Creates the backend with its own pool of exactly `threads` workers.
    pub fn new(threads: usize) -> Result<Self, GaussCoreError> {
        if threads == 0 {
            return Err(GaussCoreError::InvalidConfig(
                "Thread count must be greater than zero".to_string(),
            ));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("gauss-elim-{}", i))
            .build()
            .map_err(|e| GaussCoreError::InvalidConfig(format!("Failed to build thread pool: {}", e)))?;
        log::info!("parallel elimination pool ready with {} threads", threads);
        Ok(Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            residual_tolerance: gauss_core::DEFAULT_RESIDUAL_TOLERANCE,
            verify_residual: true,
            min_rows_per_task: 8,
            threads,
            pool: Arc::new(pool),
        })
    }

    pub fn with_params(
        threads: usize,
        pivot_tolerance: f64,
        residual_tolerance: f64,
        verify_residual: bool,
    ) -> Result<Self, GaussCoreError> {
        let mut algorithm = Self::new(threads)?;
        algorithm.pivot_tolerance = pivot_tolerance;
        algorithm.residual_tolerance = residual_tolerance;
        algorithm.verify_residual = verify_residual;
        Ok(algorithm)
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    fn forward_eliminate(&self, u: &mut [f64], n: usize) -> Result<f64, GaussCoreError> {
        let width = n + 1;
        let min_len = self.min_rows_per_task.max(1);
        let tolerance = self.pivot_tolerance;
        self.pool.install(|| -> Result<f64, GaussCoreError> {
            let mut min_abs_pivot = f64::INFINITY;
            for i in 0..n {
                let pivot = u[i * width + i];
                check_pivot(pivot, i, tolerance)?;
                min_abs_pivot = min_abs_pivot.min(pivot.abs());

                let (upper, lower) = u.split_at_mut((i + 1) * width);
                let pivot_row = &upper[i * width..];
                lower
                    .par_chunks_exact_mut(width)
                    .with_min_len(min_len)
                    .for_each(|row| reduce_row(pivot_row, row, i));
            }
            Ok(min_abs_pivot)
        })
    }
}

impl SolveAlgorithm<DenseMatrix<f64>> for ParallelGaussianElimination {
    type Value = f64;
    type Metadata = EliminationMetadata;

    fn name(&self) -> &'static str {
        "parallel"
    }

    fn solve(
        &self,
        a: &DenseMatrix<f64>,
        b: &[f64],
    ) -> Result<SolveResult<f64, EliminationMetadata>, GaussCoreError> {
        self.validate_inputs(a, b)?;
        let n = b.len();

        let mut u = augment(a, b);
        let min_abs_pivot = self.forward_eliminate(&mut u, n)?;
        let x = back_substitute(&u, n);
        log::debug!(
            "parallel elimination finished: n = {}, threads = {}",
            n,
            self.threads
        );

        let metadata = finish(
            a,
            b,
            &x,
            min_abs_pivot,
            self.verify_residual,
            self.residual_tolerance,
        )?;
        Ok(SolveResult { x, metadata })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::GaussianElimination;
    use gauss_core::Instance;

    #[test]
    fn test_parallel_rejects_zero_threads() {
        assert!(matches!(
            ParallelGaussianElimination::new(0),
            Err(GaussCoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_parallel_matches_flat_bitwise() {
        // Each row sees the same operations in the same order, so results agree exactly.
        let instance = Instance::seeded(64, 11).unwrap();
        let flat = GaussianElimination::default()
            .solve(&instance.a, &instance.b)
            .unwrap();
        let parallel = ParallelGaussianElimination::new(4)
            .unwrap()
            .solve(&instance.a, &instance.b)
            .unwrap();
        assert_eq!(flat.x, parallel.x);
        assert_eq!(flat.metadata, parallel.metadata);
    }

    #[test]
    fn test_parallel_zero_pivot() {
        let a = DenseMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let algorithm = ParallelGaussianElimination::new(2).unwrap();
        assert_eq!(algorithm.threads(), 2);
        let err = algorithm.solve(&a, &[1.0, 1.0]).err().unwrap();
        assert!(matches!(err, GaussCoreError::SingularMatrix { row: 0, .. }));
    }
}
