//! # Gauss Core Library
//!
//! Provides the shared data structures for the dense Gaussian elimination solvers:
//! the row-major `DenseMatrix`, the residual oracle, and reproducible problem instances.

// Declare modules
pub mod dense_matrix;
pub mod error;
pub mod instance;
pub mod residual;
pub mod traits;

// Re-export public types
pub use dense_matrix::DenseMatrix;
pub use error::GaussCoreError;
pub use instance::{generate, Instance};
pub use residual::{check_residual, max_abs_residual, residual, DEFAULT_RESIDUAL_TOLERANCE};
pub use traits::Matrix;
