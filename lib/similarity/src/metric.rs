//! Similarity and distance scoring strategies over numeric vectors.
//!
//! All metrics operate on two vectors of equal length, usually already
//! min-max normalized. Implementations are pure; the engines decide
//! whether a metric's scores rank ascending (distances) or descending
//! (similarities).

use simx_core::{Error, Result, Vector};

/// A scoring strategy over two (normalized) vectors.
pub trait Metric: Send + Sync {
    fn score(&self, a: &Vector, b: &Vector) -> Result<f64>;
}

/// Cosine similarity. Higher is more similar; zero-norm operands score 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineMetric;

impl Metric for CosineMetric {
    fn score(&self, a: &Vector, b: &Vector) -> Result<f64> {
        a.cosine(b)
    }
}

/// Sigmoid-scaled Euclidean distance: `1 / (1 + e^{-d})`.
///
/// Maps raw distance into (0.5, 1), but the score still *increases* with
/// distance. Callers treating it as a similarity must account for the
/// direction; the behavior is deliberate and pinned by tests rather
/// than inverted.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanMetric;

impl Metric for EuclideanMetric {
    fn score(&self, a: &Vector, b: &Vector) -> Result<f64> {
        Ok(sigmoid(a.distance_to(b)?))
    }
}

#[inline]
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Arithmetic mean of an injected list of scorers.
///
/// The default combines cosine and sigmoid-Euclidean; callers may pass
/// any non-empty list instead.
pub struct CombinedMetric {
    scorers: Vec<Box<dyn Metric>>,
}

impl CombinedMetric {
    #[must_use]
    pub fn new(scorers: Vec<Box<dyn Metric>>) -> Self {
        Self { scorers }
    }
}

impl Default for CombinedMetric {
    fn default() -> Self {
        Self::new(vec![Box::new(CosineMetric), Box::new(EuclideanMetric)])
    }
}

impl Metric for CombinedMetric {
    fn score(&self, a: &Vector, b: &Vector) -> Result<f64> {
        if self.scorers.is_empty() {
            return Err(Error::EmptyResultSet);
        }
        let mut total = 0.0;
        for scorer in &self.scorers {
            total += scorer.score(a, b)?;
        }
        Ok(total / self.scorers.len() as f64)
    }
}

/// Jaccard similarity over binary (0/1) vectors.
///
/// `a / (a + b + c)` where `a` counts positions where both are 1 and
/// `b`, `c` count the one-sided mismatches; 0 when the denominator is 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaccardMetric;

impl Metric for JaccardMetric {
    fn score(&self, a: &Vector, b: &Vector) -> Result<f64> {
        check_len(a, b)?;
        let mut both = 0usize;
        let mut mismatched = 0usize;
        for (&x, &y) in a.iter().zip(b.iter()) {
            match (x == 1.0, y == 1.0) {
                (true, true) => both += 1,
                (true, false) | (false, true) => mismatched += 1,
                (false, false) => {}
            }
        }
        let denominator = both + mismatched;
        if denominator == 0 {
            return Ok(0.0);
        }
        Ok(both as f64 / denominator as f64)
    }
}

/// Strict Dice similarity over binary (0/1) vectors: the share of
/// positions where both vectors are exactly 1, over the full length.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictDiceSimilarity;

impl Metric for StrictDiceSimilarity {
    fn score(&self, a: &Vector, b: &Vector) -> Result<f64> {
        check_len(a, b)?;
        if a.is_empty() {
            return Ok(0.0);
        }
        let both = a
            .iter()
            .zip(b.iter())
            .filter(|(&x, &y)| x == 1.0 && y == 1.0)
            .count();
        Ok(both as f64 / a.len() as f64)
    }
}

fn check_len(a: &Vector, b: &Vector) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::SizeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
