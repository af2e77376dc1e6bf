//! k-nearest-neighbor regression.

use crate::knn::Knn;
use crate::result::KnnResult;
use simx_core::{Error, Matrix, Result, Sample, Vector};

/// Numeric prediction from the k nearest neighbors.
///
/// Neighbors are found exactly like [`Knn`] finds them; the prediction
/// is the component-wise mean of their *full raw* numeric vectors, so a
/// feature the query does not carry (the unknown being predicted) still
/// shows up in the output. Callers pick the component, or read a single
/// feature with [`KnnResult::predict`].
pub struct KnnRegression<'a, S> {
    dataset: &'a [S],
    k: usize,
}

impl<'a, S: Sample + Sync> KnnRegression<'a, S> {
    #[must_use]
    pub fn new(dataset: &'a [S], k: usize) -> Self {
        Self { dataset, k }
    }

    /// The ranked neighbors themselves.
    pub fn fit<T: Sample>(&self, target: &T) -> Result<KnnResult<'a, S>> {
        Knn::new(self.dataset, self.k).fit(target)
    }

    /// Component-wise mean of the k nearest samples' raw numeric
    /// vectors.
    pub fn classify<T: Sample>(&self, target: &T) -> Result<Vector> {
        let result = self.fit(target)?;
        if result.is_empty() {
            return Err(Error::EmptyResultSet);
        }
        Matrix::new(result.samples().map(Sample::to_vector).collect()).column_means()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simx_core::{Feature, FeatureSet};

    fn person(height: f64, age: f64, weight: f64) -> FeatureSet {
        FeatureSet::default()
            .with(Feature::numeric("height", height))
            .with(Feature::numeric("age", age))
            .with(Feature::numeric("weight", weight))
    }

    fn dataset() -> Vec<FeatureSet> {
        vec![
            person(5.0, 45.0, 77.0),
            person(5.1, 26.0, 47.0),
            person(5.6, 30.0, 55.0),
            person(5.9, 34.0, 59.0),
            person(4.8, 40.0, 72.0),
            person(5.8, 36.0, 60.0),
            person(5.3, 20.0, 40.0),
            person(5.8, 28.0, 60.0),
            person(5.5, 42.0, 58.0),
            person(6.0, 32.0, 58.0),
        ]
    }

    fn query() -> FeatureSet {
        FeatureSet::default()
            .with(Feature::numeric("height", 5.5))
            .with(Feature::numeric("age", 38.0))
    }

    #[test]
    fn test_predicted_weight_is_neighbor_mean() {
        let dataset = dataset();
        let regression = KnnRegression::new(&dataset, 3);
        let mean = regression.classify(&query()).unwrap();

        // nearest three carry weights 58, 60 and 55
        assert_eq!(mean.len(), 3);
        assert!((mean[2] - 57.67).abs() < 0.01);
    }

    #[test]
    fn test_mean_vector_covers_all_components() {
        let dataset = dataset();
        let regression = KnnRegression::new(&dataset, 3);
        let mean = regression.classify(&query()).unwrap();

        // heights 5.5, 5.8, 5.6 and ages 42, 36, 30
        assert!((mean[0] - 16.9 / 3.0).abs() < 1e-9);
        assert!((mean[1] - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_predict_matches_classify_component() {
        let dataset = dataset();
        let result = KnnRegression::new(&dataset, 3).fit(&query()).unwrap();
        assert!((result.predict("weight").unwrap() - 57.67).abs() < 0.01);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset: Vec<FeatureSet> = Vec::new();
        let regression = KnnRegression::new(&dataset, 3);
        assert_eq!(regression.classify(&query()), Err(Error::EmptyResultSet));
    }
}
