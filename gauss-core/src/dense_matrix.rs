use crate::error::GaussCoreError;
use crate::traits::Matrix;
use bytemuck::Pod;
use num_traits::{One, Zero};
use std::ops::Index;

/// Represents a dense matrix stored in row-major order on the CPU.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T: Copy + Send + Sync + std::fmt::Debug + Default + Pod> {
    rows: usize,
    cols: usize,
    data: Vec<T>, // Data stored row-major: data[row * cols + col]
}

impl<T: Copy + Send + Sync + std::fmt::Debug + Default + Pod> DenseMatrix<T> {
    /// Creates a new DenseMatrix from raw data, dimensions, assuming row-major order.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, GaussCoreError> {
        if data.len() != rows * cols {
            return Err(GaussCoreError::InvalidDimensions(format!(
                "Data length ({}) does not match dimensions ({}x{})",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from a slice of rows. Every row must have the same length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, GaussCoreError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GaussCoreError::InvalidDimensions(format!(
                    "Row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Creates a new DenseMatrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }

    /// Returns a slice view of the underlying data vector.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the rows as contiguous slices.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.cols.max(1)).take(self.rows)
    }

    /// Gets the element at the specified row and column (immutable).
    /// Returns None if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }
}

impl<T> DenseMatrix<T>
where
    T: Copy + Send + Sync + std::fmt::Debug + Default + Pod + Zero + One,
{
    /// Creates the n x n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self {
            rows: n,
            cols: n,
            data: vec![T::zero(); n * n],
        };
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }
}

impl<T: Copy + Send + Sync + std::fmt::Debug + Default + Pod> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

// Implement the generic Matrix trait
impl<T: Copy + Send + Sync + std::fmt::Debug + Default + Pod> Matrix for DenseMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn value_at(&self, row: usize, col: usize) -> Option<T> {
        self.get(row, col).copied()
    }

    // rows(), cols(), is_square() are provided by default impls in the trait
}

#[cfg(test)]
mod tests {
    use crate::{DenseMatrix, GaussCoreError, Matrix};

    #[test]
    fn test_dense_matrix_new() {
        let m: DenseMatrix<f64> = DenseMatrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.dims(), (2, 3));
        assert!(!m.is_square());
        assert_eq!(m[(1, 0)], 4.0);
    }

    #[test]
    fn test_dense_matrix_new_invalid_len() {
        let m = DenseMatrix::new(2, 2, vec![1.0f64, 2.0, 3.0]);
        match m.err().unwrap() {
            GaussCoreError::InvalidDimensions(msg) => assert!(msg.contains("Data length")),
            _ => panic!("Expected InvalidDimensions error"),
        }
    }

    #[test]
    fn test_dense_matrix_from_rows() {
        let m: DenseMatrix<f64> = DenseMatrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
        assert_eq!(m.data(), &[2.0, 1.0, 1.0, 3.0]);
        assert_eq!(m.value_at(1, 1), Some(3.0));
        assert_eq!(m.value_at(2, 0), None);

        let ragged = DenseMatrix::<f64>::from_rows(&[vec![2.0, 1.0], vec![1.0]]);
        assert!(matches!(ragged, Err(GaussCoreError::InvalidDimensions(_))));
    }

    #[test]
    fn test_dense_matrix_identity() {
        let m: DenseMatrix<f64> = DenseMatrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], if i == j { 1.0 } else { 0.0 });
            }
        }
        assert_eq!(m.row_iter().count(), 3);
    }

    #[test]
    fn test_dense_matrix_row_iter() {
        let m: DenseMatrix<f64> = DenseMatrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let rows: Vec<&[f64]> = m.row_iter().collect();
        assert_eq!(rows, vec![&[1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0][..]]);
        assert_eq!(m.get(1, 2), Some(&6.0));
        assert!(m.get(2, 0).is_none());

        let empty: DenseMatrix<f64> = DenseMatrix::zeros(0, 0);
        assert_eq!(empty.row_iter().count(), 0);
    }
}
