//! `gauss-lsolver`: dense Gaussian elimination solvers for square systems `Ax = b`.
//!
//! Several backends implement the same [`algorithms::SolveAlgorithm`] contract
//! (forward elimination without pivoting, back substitution, residual check), so a
//! caller can pick one at the call site and compare them on identical inputs.

// Core modules
pub mod algorithms;

// Re-export from gauss_core
pub use gauss_core::{DenseMatrix, GaussCoreError, Instance, Matrix};

use algorithms::{GaussianElimination, SolveAlgorithm};

/// Solves `Ax = b` with the default flat backend and returns `x`.
///
/// `a` and `b` are left untouched; elimination runs on an internal copy.
///
/// # Errors
/// * `InvalidDimensions` if `A` is not square, is empty, or does not match `b`.
/// * `SingularMatrix` if a pivot is zero (no row exchanges are performed).
/// * `ResidualCheckFailure` if the computed `x` does not reproduce `b`.
pub fn solve(a: &DenseMatrix<f64>, b: &[f64]) -> Result<Vec<f64>, GaussCoreError> {
    GaussianElimination::default().solve(a, b).map(|result| result.x)
}
