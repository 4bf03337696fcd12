use thiserror::Error;

pub type Result<T> = core::result::Result<T, GaussCoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaussCoreError {
    #[error("Invalid matrix dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Matrix is singular: pivot at row {row} is {pivot:e}")]
    SingularMatrix { row: usize, pivot: f64 },

    #[error("Residual check failed: max |Ax - b| = {residual:e} exceeds tolerance {tolerance:e}")]
    ResidualCheckFailure { residual: f64, tolerance: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GaussCoreError {
    /// Shorthand for the common "A is n x n but b has length m" failure.
    pub fn rhs_mismatch(rows: usize, rhs_len: usize) -> Self {
        GaussCoreError::InvalidDimensions(format!(
            "Matrix A rows ({}) must match RHS vector b length ({})",
            rows, rhs_len
        ))
    }
}
