//! Column-wise min-max normalization.
//!
//! A [`Normalizer`] is fit once from a reference matrix and then applied
//! to any vector of compatible width. Fitting derives one [`MinMax`] per
//! column; the fitted value is a pure function, safe to reuse across
//! calls and threads.

use serde::{Deserialize, Serialize};
use simx_core::{Error, Matrix, MinMax, Result, Vector};
use tracing::debug;

/// Columns with an observed range below this are treated as constant and
/// passed through untouched, so near-constant columns are not blown up
/// into arbitrary 0/1 noise.
pub const NORMALIZE_RANGE_THRESHOLD: f64 = 1e-9;

/// A fitted per-column min-max transform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Normalizer {
    columns: Vec<MinMax>,
}

impl Normalizer {
    /// Fit a normalizer from the columns of `matrix`.
    pub fn min_max(matrix: &Matrix) -> Result<Self> {
        let columns = matrix.column_min_max()?;
        let constant = columns
            .iter()
            .filter(|mm| mm.difference() < NORMALIZE_RANGE_THRESHOLD)
            .count();
        if constant > 0 {
            debug!(constant, "near-constant columns will pass through unscaled");
        }
        Ok(Self { columns })
    }

    #[inline]
    #[must_use]
    pub fn total_columns(&self) -> usize {
        self.columns.len()
    }

    /// Map each component of `vector` to `(v - min) / (max - min)` for
    /// its column. Columns with a sub-threshold range pass through
    /// unchanged.
    pub fn normalize(&self, vector: &Vector) -> Result<Vector> {
        if vector.len() != self.columns.len() {
            return Err(Error::SizeMismatch {
                left: self.columns.len(),
                right: vector.len(),
            });
        }
        let data = vector
            .iter()
            .zip(&self.columns)
            .map(|(&v, mm)| {
                if mm.difference() < NORMALIZE_RANGE_THRESHOLD {
                    v
                } else {
                    (v - mm.min()) / mm.difference()
                }
            })
            .collect();
        Ok(Vector::new(data))
    }
}
