use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A probability, held as a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    /// Create from a fraction. Fails with [`Error::InvalidProbability`]
    /// if the percentage representation falls outside 0-100.
    pub fn new(fraction: f64) -> Result<Self> {
        let percentage = fraction * 100.0;
        if !(0.0..=100.0).contains(&percentage) {
            return Err(Error::InvalidProbability(percentage));
        }
        Ok(Self(fraction))
    }

    /// The fraction `count / total`.
    pub fn from_ratio(count: usize, total: usize) -> Result<Self> {
        if total == 0 {
            return Err(Error::DivisionByZero);
        }
        Self::new(count as f64 / total as f64)
    }

    #[inline]
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.0 * 100.0
    }
}

impl std::fmt::Display for Probability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}
