//! k-nearest-neighbor search over mixed numeric + categorical samples.

use crate::knn::Ranking;
use crate::pipeline::{effective_k, rank};
use crate::result::KnnResult;
use simx_core::{Result, Sample};
use simx_similarity::GowersMetric;

/// Neighbor search ranked by Gower distance to the query (ascending).
///
/// Unlike [`crate::Knn`], samples are compared feature by feature rather
/// than through a normalized vector space, so rows missing some of the
/// query's numeric features stay in the running: the missing columns
/// simply drop out of that row's mean.
pub struct KnnMixedData<'a, S> {
    dataset: &'a [S],
    k: usize,
}

impl<'a, S: Sample + Sync> KnnMixedData<'a, S> {
    #[must_use]
    pub fn new(dataset: &'a [S], k: usize) -> Self {
        Self { dataset, k }
    }

    /// Rank the dataset by Gower distance to `target` and keep the k
    /// nearest samples.
    pub fn fit<T: Sample + Sync>(&self, target: &T) -> Result<KnnResult<'a, S>> {
        let distances = GowersMetric::row_distances(self.dataset, target)?;
        let k = effective_k(self.k, self.dataset.len());

        let scored = distances
            .into_iter()
            .zip(self.dataset)
            .enumerate()
            .map(|(index, (score, sample))| (score, index, sample))
            .collect();

        Ok(rank(scored, Ranking::Ascending, k))
    }
}
