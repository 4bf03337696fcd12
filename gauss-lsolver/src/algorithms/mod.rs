use gauss_core::{GaussCoreError, Matrix};
use num_traits::Float;

pub struct SolveResult<V: Float, M> {
    pub x: Vec<V>,   // Solution vector
    pub metadata: M, // Metadata about the solve process
}

// --- Algorithm Trait Definition ---
/// Trait representing a specific linear system solving algorithm.
/// Generic over the Matrix type it supports. Every backend solves the same
/// problem with the same semantics, so callers can swap them freely.
pub trait SolveAlgorithm<M: Matrix> {
    /// The numeric type the algorithm operates on (e.g., f32, f64).
    /// Must match the Matrix::Value type.
    type Value: Float + Copy + Send + Sync + std::fmt::Debug + Default;
    type Metadata: std::fmt::Debug;

    /// Short backend name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Solves the linear system Ax = b for x.
    ///
    /// # Arguments
    ///
    /// * `a` - The coefficient matrix A. Never modified.
    /// * `b` - The right-hand side vector b. Never modified.
    ///
    /// # Returns
    ///
    /// A `Result` containing the solution vector x or a `GaussCoreError`.
    fn solve(
        &self,
        a: &M,
        b: &[Self::Value],
    ) -> Result<SolveResult<Self::Value, Self::Metadata>, GaussCoreError>;

    // Helper for input validation, can be called by implementations.
    fn validate_inputs(&self, a: &M, b: &[Self::Value]) -> Result<(), GaussCoreError> {
        let (rows, cols) = a.dims();
        if !a.is_square() {
            return Err(GaussCoreError::InvalidDimensions(format!(
                "Matrix A must be square (dims: {}x{})",
                rows, cols
            )));
        }
        if rows != b.len() {
            return Err(GaussCoreError::rhs_mismatch(rows, b.len()));
        }
        if rows == 0 {
            return Err(GaussCoreError::InvalidDimensions(
                "System must have at least one unknown".to_string(),
            ));
        }
        Ok(())
    }
}

// --- Algorithm Implementations ---

pub mod cpu_dense_flat; // Flat row-major augmented buffer
pub mod cpu_dense_naive; // Row-of-rows working copy
pub mod cpu_dense_parallel; // Rows below each pivot reduced on a rayon pool

mod elimination;

pub use cpu_dense_parallel::ParallelGaussianElimination;

/// Metadata reported by every Gaussian elimination backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EliminationMetadata {
    /// Number of unknowns.
    pub size: usize,
    /// Smallest pivot magnitude met during forward elimination.
    pub min_abs_pivot: f64,
    /// `max_i |(Ax - b)_i|`, present when the residual check ran.
    pub residual_norm: Option<f64>,
}

// --- Algorithm Struct Definitions ---
// Define structs that represent specific algorithms and hold their parameters.

/// Gaussian elimination without pivoting over a flat augmented buffer.
#[derive(Debug, Clone)]
pub struct GaussianElimination {
    /// Pivots with `|pivot| <= pivot_tolerance` abort the solve as singular.
    pub pivot_tolerance: f64,
    /// Bound on `max_i |(Ax - b)_i|` for the returned solution.
    pub residual_tolerance: f64,
    pub verify_residual: bool,
}

impl Default for GaussianElimination {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            residual_tolerance: gauss_core::DEFAULT_RESIDUAL_TOLERANCE,
            verify_residual: true,
        }
    }
}

impl GaussianElimination {
    /// Creates a new instance of the algorithm with default parameters.
    pub fn new() -> Self {
        Self::default()
    }
    /// Creates a new instance of the algorithm with specified parameters.
    pub fn with_params(pivot_tolerance: f64, residual_tolerance: f64, verify_residual: bool) -> Self {
        Self {
            pivot_tolerance,
            residual_tolerance,
            verify_residual,
        }
    }
}

/// Same algorithm as [`GaussianElimination`], but the working form is a `Vec` of rows.
#[derive(Debug, Clone)]
pub struct NaiveGaussianElimination {
    pub pivot_tolerance: f64,
    pub residual_tolerance: f64,
    pub verify_residual: bool,
}

impl Default for NaiveGaussianElimination {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            residual_tolerance: gauss_core::DEFAULT_RESIDUAL_TOLERANCE,
            verify_residual: true,
        }
    }
}

impl NaiveGaussianElimination {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_params(pivot_tolerance: f64, residual_tolerance: f64, verify_residual: bool) -> Self {
        Self {
            pivot_tolerance,
            residual_tolerance,
            verify_residual,
        }
    }
}

/// Pivot magnitude at or below which a matrix is treated as singular.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;
