use gauss_core::{DenseMatrix, GaussCoreError};
use log::debug;

use super::elimination::{augment, back_substitute, check_pivot, finish, reduce_row};
use super::{EliminationMetadata, GaussianElimination, SolveAlgorithm, SolveResult};

impl SolveAlgorithm<DenseMatrix<f64>> for GaussianElimination {
    type Value = f64;
    type Metadata = EliminationMetadata;

    fn name(&self) -> &'static str {
        "flat"
    }

    fn solve(
        &self,
        a: &DenseMatrix<f64>,
        b: &[f64],
    ) -> Result<SolveResult<f64, EliminationMetadata>, GaussCoreError> {
        self.validate_inputs(a, b)?;
        let n = b.len();

        let mut u = augment(a, b);
        let min_abs_pivot = forward_eliminate(&mut u, n, self.pivot_tolerance)?;
        let x = back_substitute(&u, n);
        debug!("flat elimination finished: n = {}, min |pivot| = {:e}", n, min_abs_pivot);

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

/// Reduces the augmented buffer `u` (width `n + 1`) to upper-triangular form in place.
///
/// Row `i` is the pivot row as encountered; no rows are exchanged. Returns the
/// smallest pivot magnitude seen.
pub(crate) fn forward_eliminate(
    u: &mut [f64],
    n: usize,
    pivot_tolerance: f64,
) -> Result<f64, GaussCoreError> {
    let width = n + 1;
    let mut min_abs_pivot = f64::INFINITY;
    for i in 0..n {
        let pivot = u[i * width + i];
        check_pivot(pivot, i, pivot_tolerance)?;
        min_abs_pivot = min_abs_pivot.min(pivot.abs());

        let (upper, lower) = u.split_at_mut((i + 1) * width);
        let pivot_row = &upper[i * width..];
        for row in lower.chunks_exact_mut(width) {
            reduce_row(pivot_row, row, i);
        }
    }
    Ok(min_abs_pivot)
}
