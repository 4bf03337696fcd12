//! Residual computation used as the correctness oracle for every solver backend.

use crate::error::{GaussCoreError, Result};
use crate::traits::Matrix;
use num_traits::{Float, ToPrimitive, Zero};

/// Default bound on `max_i |(Ax - b)_i|` accepted by [`check_residual`].
pub const DEFAULT_RESIDUAL_TOLERANCE: f64 = 1e-5;

/// Computes the residual vector `Ax - b`.
///
/// # Errors
/// Returns `InvalidDimensions` if `A` is not `b.len() x x.len()`.
pub fn residual<M>(a: &M, x: &[M::Value], b: &[M::Value]) -> Result<Vec<M::Value>>
where
    M: Matrix,
    M::Value: Float,
{
    let (rows, cols) = a.dims();
    if rows != b.len() || cols != x.len() {
        return Err(GaussCoreError::InvalidDimensions(format!(
            "Residual needs A ({}x{}) to match x ({}) and b ({})",
            rows,
            cols,
            x.len(),
            b.len()
        )));
    }
    let mut r = Vec::with_capacity(rows);
    for (i, &bi) in b.iter().enumerate() {
        let mut acc = M::Value::zero();
        for (j, &xj) in x.iter().enumerate() {
            let aij = a
                .value_at(i, j)
                .ok_or_else(|| GaussCoreError::Internal(format!("missing entry ({}, {})", i, j)))?;
            acc = acc + aij * xj;
        }
        r.push(acc - bi);
    }
    Ok(r)
}

/// Infinity norm of the residual: `max_i |sum_j A[i][j] x[j] - b[i]|`.
pub fn max_abs_residual<M>(a: &M, x: &[M::Value], b: &[M::Value]) -> Result<M::Value>
where
    M: Matrix,
    M::Value: Float,
{
    let r = residual(a, x, b)?;
    // NaN must not slip through as "small"
    Ok(r.into_iter().fold(M::Value::zero(), |acc, v| {
        if v.is_nan() || acc.is_nan() {
            M::Value::nan()
        } else {
            acc.max(v.abs())
        }
    }))
}

/// Fails with `ResidualCheckFailure` when the residual norm is not below `tolerance`.
pub fn check_residual<M>(a: &M, x: &[M::Value], b: &[M::Value], tolerance: f64) -> Result<f64>
where
    M: Matrix,
    M::Value: Float,
{
    let norm = max_abs_residual(a, x, b)?
        .to_f64()
        .unwrap_or(f64::NAN);
    if norm < tolerance {
        Ok(norm)
    } else {
        log::error!(
            "residual check failed: {:e} >= {:e} (n = {})",
            norm,
            tolerance,
            x.len()
        );
        Err(GaussCoreError::ResidualCheckFailure {
            residual: norm,
            tolerance,
        })
    }
}
