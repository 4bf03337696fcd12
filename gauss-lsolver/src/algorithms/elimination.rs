//! Building blocks shared by the Gaussian elimination backends.

use gauss_core::{check_residual, DenseMatrix, GaussCoreError};

use super::EliminationMetadata;

/// Copies `[A | b]` into a fresh row-major buffer of width `n + 1`.
pub(super) fn augment(a: &DenseMatrix<f64>, b: &[f64]) -> Vec<f64> {
    let n = b.len();
    let width = n + 1;
    let mut u = Vec::with_capacity(n * width);
    for (row, &rhs) in a.row_iter().zip(b) {
        u.extend_from_slice(row);
        u.push(rhs);
    }
    debug_assert_eq!(u.len(), n * width);
    u
}

/// Rejects a pivot whose magnitude is at or below `tolerance` (or is not finite).
#[inline]
pub(super) fn check_pivot(pivot: f64, row: usize, tolerance: f64) -> Result<(), GaussCoreError> {
    if pivot.is_finite() && pivot.abs() > tolerance {
        Ok(())
    } else {
        log::debug!("zero pivot {:e} at row {}", pivot, row);
        Err(GaussCoreError::SingularMatrix { row, pivot })
    }
}

/// Subtracts `m * pivot_row` from `row` over columns `col..`, with `m = row[col] / pivot_row[col]`.
#[inline]
pub(super) fn reduce_row(pivot_row: &[f64], row: &mut [f64], col: usize) {
    let m = row[col] / pivot_row[col];
    for (dst, &src) in row[col..].iter_mut().zip(&pivot_row[col..]) {
        *dst -= m * src;
    }
}

/// Back substitution over an upper-triangular augmented buffer of width `n + 1`.
pub(super) fn back_substitute(u: &[f64], n: usize) -> Vec<f64> {
    let width = n + 1;
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let row = &u[i * width..(i + 1) * width];
        let tail: f64 = row[i + 1..n]
            .iter()
            .zip(&x[i + 1..])
            .map(|(uij, xj)| uij * xj)
            .sum();
        x[i] = (row[n] - tail) / row[i];
    }
    x
}

/// Runs the residual oracle (when enabled) and assembles the metadata.
pub(super) fn finish(
    a: &DenseMatrix<f64>,
    b: &[f64],
    x: &[f64],
    min_abs_pivot: f64,
    verify_residual: bool,
    residual_tolerance: f64,
) -> Result<EliminationMetadata, GaussCoreError> {
    let residual_norm = if verify_residual {
        Some(check_residual(a, x, b, residual_tolerance)?)
    } else {
        None
    };
    Ok(EliminationMetadata {
        size: b.len(),
        min_abs_pivot,
        residual_norm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_augment_layout() {
        let a = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(augment(&a, &[5.0, 6.0]), vec![1.0, 2.0, 5.0, 3.0, 4.0, 6.0]);
    }

    #[test]
    fn test_reduce_row_zeroes_column() {
        let pivot = [2.0, 1.0, 4.0];
        let mut row = [1.0, 3.0, 5.0];
        reduce_row(&pivot, &mut row, 0);
        assert_eq!(row, [0.0, 2.5, 3.0]);
    }

    #[test]
    fn test_back_substitute_upper_triangular() {
        // [2 1 | 5]
        // [0 4 | 8]
        let u = [2.0, 1.0, 5.0, 0.0, 4.0, 8.0];
        assert_eq!(back_substitute(&u, 2), vec![1.5, 2.0]);
    }

    #[test]
    fn test_check_pivot() {
        assert!(check_pivot(0.5, 0, 1e-12).is_ok());
        assert!(check_pivot(-0.5, 0, 1e-12).is_ok());
        assert_eq!(
            check_pivot(0.0, 3, 1e-12),
            Err(GaussCoreError::SingularMatrix { row: 3, pivot: 0.0 })
        );
        assert!(check_pivot(f64::NAN, 0, 1e-12).is_err());
    }
}
