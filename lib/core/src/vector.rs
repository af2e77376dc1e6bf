use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A fixed-length, ordered sequence of floating point numbers.
///
/// Vectors are immutable values: every operation returns a new `Vector`.
/// Binary operations require both operands to have the same length and
/// fail with [`Error::SizeMismatch`] otherwise; lengths are never
/// silently truncated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    fn check_len(&self, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(Error::SizeMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        Ok(Vector::new(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a + b)
                .collect(),
        ))
    }

    /// Element-wise difference.
    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        Ok(Vector::new(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a - b)
                .collect(),
        ))
    }

    /// Element-wise product.
    pub fn multiply(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        Ok(Vector::new(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a * b)
                .collect(),
        ))
    }

    /// Element-wise quotient. Fails with [`Error::DivisionByZero`] if any
    /// component of `other` is zero.
    pub fn divide(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        if other.data.iter().any(|d| *d == 0.0) {
            return Err(Error::DivisionByZero);
        }
        Ok(Vector::new(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a / b)
                .collect(),
        ))
    }

    /// Divide every component by `scalar`.
    pub fn divide_scalar(&self, scalar: f64) -> Result<Vector> {
        if scalar == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Vector::new(self.data.iter().map(|x| x / scalar).collect()))
    }

    /// Scale every component by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Vector {
        Vector::new(self.data.iter().map(|x| x * scalar).collect())
    }

    /// Dot product.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_len(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Euclidean norm, `sqrt(Σ xᵢ²)`.
    #[inline]
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Component sum.
    #[inline]
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Cosine similarity with another vector.
    ///
    /// Defined as 0.0 when either norm is zero, so all-zero vectors
    /// compare as dissimilar instead of dividing by zero.
    pub fn cosine(&self, other: &Vector) -> Result<f64> {
        self.check_len(other)?;
        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return Ok(0.0);
        }
        Ok(self.dot(other)? / (norm_a * norm_b))
    }

    /// Euclidean distance to another vector.
    pub fn distance_to(&self, other: &Vector) -> Result<f64> {
        Ok(self.subtract(other)?.norm())
    }

    /// The observed (min, max) of this vector's components, under the
    /// zero-range convention of [`MinMax`].
    #[must_use]
    pub fn min_max(&self) -> MinMax {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &x in &self.data {
            min = min.min(x);
            max = max.max(x);
        }
        MinMax::new(min, max)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Vector::new(data)
    }
}

impl std::ops::Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

/// The observed (min, max) of one column.
///
/// A degenerate range (min not strictly below max, which covers the
/// constant-column case) collapses to `(0, 1)`: dividing by the unit
/// range leaves values untouched, so normalization never divides by
/// zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MinMax {
    min: f64,
    max: f64,
}

impl MinMax {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min >= max {
            return Self { min: 0.0, max: 1.0 };
        }
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`.
    #[inline]
    #[must_use]
    pub fn difference(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_subtract_round_trip() {
        let a = Vector::new(vec![1.0, 2.0, 3.5]);
        let b = Vector::new(vec![0.5, 0.25, 4.0]);
        let round_trip = a.add(&b).unwrap().subtract(&b).unwrap();
        assert_eq!(round_trip, a);
    }

    #[test]
    fn test_dot() {
        let a = Vector::new(vec![1.0, 2.0, 3.0]);
        let b = Vector::new(vec![4.0, -5.0, 6.0]);
        assert!((a.dot(&b).unwrap() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_norm() {
        let v = Vector::new(vec![1.0, 2.0, 3.0]);
        assert!((v.norm() - 3.742).abs() < 1e-3);
    }

    #[test]
    fn test_size_mismatch() {
        let a = Vector::new(vec![1.0, 2.0]);
        let b = Vector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            a.add(&b),
            Err(Error::SizeMismatch { left: 2, right: 3 })
        );
        assert!(a.dot(&b).is_err());
        assert!(a.distance_to(&b).is_err());
    }

    #[test]
    fn test_cosine_self_is_one() {
        let v = Vector::new(vec![2.0, 1.0, 2.0]);
        assert!((v.cosine(&v).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_norm_is_zero() {
        let v = Vector::new(vec![1.0, 2.0, 3.0]);
        let zero = Vector::new(vec![0.0, 0.0, 0.0]);
        assert_eq!(v.cosine(&zero).unwrap(), 0.0);
        assert_eq!(zero.cosine(&zero).unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_known_value() {
        let a = Vector::new(vec![2.0, 1.0, 2.0, 3.0, 2.0, 9.0]);
        let b = Vector::new(vec![3.0, 4.0, 2.0, 4.0, 5.0, 5.0]);
        assert!((a.cosine(&b).unwrap() - 0.81).abs() < 0.01);
    }

    #[test]
    fn test_distance_to() {
        let a = Vector::new(vec![0.0, 0.0]);
        let b = Vector::new(vec![3.0, 4.0]);
        assert!((a.distance_to(&b).unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_divide_by_zero() {
        let a = Vector::new(vec![1.0, 2.0]);
        assert_eq!(a.divide_scalar(0.0), Err(Error::DivisionByZero));
        let zero = Vector::new(vec![1.0, 0.0]);
        assert_eq!(a.divide(&zero), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_min_max_collapses_constant_range() {
        let mm = MinMax::new(5.0, 5.0);
        assert_eq!(mm.min(), 0.0);
        assert_eq!(mm.max(), 1.0);
        assert_eq!(mm.difference(), 1.0);
    }

    #[test]
    fn test_vector_min_max() {
        let v = Vector::new(vec![3.0, -1.0, 7.0, 2.0]);
        let mm = v.min_max();
        assert_eq!(mm.min(), -1.0);
        assert_eq!(mm.max(), 7.0);
        assert_eq!(mm.difference(), 8.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let v = Vector::new(vec![1.0, 2.5, -3.0]);
        let json = serde_json::to_string(&v).unwrap();
        let parsed: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, parsed);
    }
}
