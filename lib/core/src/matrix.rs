use crate::error::{Error, Result};
use crate::vector::{MinMax, Vector};
use serde::{Deserialize, Serialize};

/// An ordered collection of row vectors.
///
/// Rows are not validated at construction; operations that need a
/// rectangular shape (`transpose` and the column reductions built on it)
/// check lazily and fail with [`Error::RaggedMatrix`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Matrix {
    rows: Vec<Vector>,
}

impl Matrix {
    #[inline]
    #[must_use]
    pub fn new(rows: Vec<Vector>) -> Self {
        Self { rows }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    #[inline]
    pub fn row(&self, index: usize) -> Option<&Vector> {
        self.rows.get(index)
    }

    #[inline]
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    /// The row width, taken from the first row (0 for an empty matrix).
    #[inline]
    #[must_use]
    pub fn total_columns(&self) -> usize {
        self.rows.first().map_or(0, Vector::len)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn check_rectangular(&self) -> Result<usize> {
        let expected = self.total_columns();
        for (row, vector) in self.rows.iter().enumerate() {
            if vector.len() != expected {
                return Err(Error::RaggedMatrix {
                    row,
                    expected,
                    actual: vector.len(),
                });
            }
        }
        Ok(expected)
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Result<Matrix> {
        let columns = self.check_rectangular()?;
        let mut data = vec![Vec::with_capacity(self.total_rows()); columns];
        for row in &self.rows {
            for (i, &x) in row.as_slice().iter().enumerate() {
                data[i].push(x);
            }
        }
        Ok(Matrix::new(data.into_iter().map(Vector::new).collect()))
    }

    /// Apply `f` to every column (a transposed row), returning one value
    /// per column.
    pub fn reduce_column_wise<T>(&self, f: impl Fn(&Vector) -> T) -> Result<Vec<T>> {
        Ok(self.transpose()?.rows.iter().map(f).collect())
    }

    /// Per-column (min, max) across all rows.
    pub fn column_min_max(&self) -> Result<Vec<MinMax>> {
        self.reduce_column_wise(Vector::min_max)
    }

    /// Column sums as a single vector.
    pub fn sum_columns(&self) -> Result<Vector> {
        Ok(Vector::new(self.reduce_column_wise(Vector::sum)?))
    }

    /// Component-wise mean of all rows.
    pub fn column_means(&self) -> Result<Vector> {
        if self.rows.is_empty() {
            return Err(Error::EmptyResultSet);
        }
        self.sum_columns()?.divide_scalar(self.total_rows() as f64)
    }
}

impl From<Vec<Vector>> for Matrix {
    fn from(rows: Vec<Vector>) -> Self {
        Matrix::new(rows)
    }
}
