use gauss_core::{DenseMatrix, GaussCoreError};

use super::elimination::{check_pivot, finish, reduce_row};
use super::{EliminationMetadata, NaiveGaussianElimination, SolveAlgorithm, SolveResult};

impl SolveAlgorithm<DenseMatrix<f64>> for NaiveGaussianElimination {
    type Value = f64;
    type Metadata = EliminationMetadata;

    fn name(&self) -> &'static str {
        "naive"
    }

    fn solve(
        &self,
        a: &DenseMatrix<f64>,
        b: &[f64],
    ) -> Result<SolveResult<f64, EliminationMetadata>, GaussCoreError> {
        self.validate_inputs(a, b)?;
        let n = b.len();

        // Working copy: one heap allocation per row, [A | b]
        let mut u: Vec<Vec<f64>> = a
            .row_iter()
            .zip(b)
            .map(|(row, &rhs)| {
                let mut r = row.to_vec();
                r.push(rhs);
                r
            })
            .collect();

        let mut min_abs_pivot = f64::INFINITY;
        for i in 0..n {
            let pivot = u[i][i];
            check_pivot(pivot, i, self.pivot_tolerance)?;
            min_abs_pivot = min_abs_pivot.min(pivot.abs());

            let (upper, lower) = u.split_at_mut(i + 1);
            let pivot_row = &upper[i];
            for row in lower.iter_mut() {
                reduce_row(pivot_row, row, i);
            }
        }

        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let mut acc = u[i][n];
            for j in i + 1..n {
                acc -= u[i][j] * x[j];
            }
            x[i] = acc / u[i][i];
        }
        log::debug!("naive elimination finished: n = {}", n);

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

    #[test]
    fn test_naive_zero_pivot() {
        let a = DenseMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let err = NaiveGaussianElimination::default()
            .solve(&a, &[1.0, 1.0])
            .err()
            .unwrap();
        assert_eq!(err, GaussCoreError::SingularMatrix { row: 0, pivot: 0.0 });
    }

    #[test]
    fn test_naive_triangular_input() {
        let a = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![0.0, 4.0]]).unwrap();
        let result = NaiveGaussianElimination::new().solve(&a, &[5.0, 8.0]).unwrap();
        assert_eq!(result.x, vec![1.0, 2.0]);
        assert_eq!(result.metadata.size, 2);
    }
}
