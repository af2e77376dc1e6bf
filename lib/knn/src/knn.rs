//! Plain k-nearest-neighbor classification and most-similar retrieval.

use crate::pipeline::{effective_k, rank, scope_and_normalize};
use crate::result::KnnResult;
use rayon::prelude::*;
use simx_core::{Error, Result, Sample};
use simx_similarity::Metric;

/// Sort direction for a metric's scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// Lower scores rank first (distances).
    Ascending,
    /// Higher scores rank first (similarities).
    Descending,
}

/// k-nearest-neighbor search over numeric feature vectors.
///
/// Each query is a fresh run: the dataset is scoped to the query's
/// numeric features, a min-max normalizer is fit from the scoped matrix,
/// every vector is weighted by the query's feature weights, and the
/// dataset is ranked by normalized weighted Euclidean distance to the
/// query (ascending). A different metric and direction can be injected
/// with [`Knn::with_metric`].
pub struct Knn<'a, S> {
    dataset: &'a [S],
    k: usize,
    metric: Option<Box<dyn Metric>>,
    ranking: Ranking,
}

impl<'a, S: Sample + Sync> Knn<'a, S> {
    #[must_use]
    pub fn new(dataset: &'a [S], k: usize) -> Self {
        Self {
            dataset,
            k,
            metric: None,
            ranking: Ranking::Ascending,
        }
    }

    /// Replace distance-to-query scoring with an injected metric and its
    /// sort direction.
    #[must_use]
    pub fn with_metric(mut self, metric: Box<dyn Metric>, ranking: Ranking) -> Self {
        self.metric = Some(metric);
        self.ranking = ranking;
        self
    }

    /// Rank the dataset against `target` and keep the k best samples.
    pub fn fit<T: Sample>(&self, target: &T) -> Result<KnnResult<'a, S>> {
        let scoped = scope_and_normalize(self.dataset, target)?;
        let k = effective_k(self.k, scoped.candidates.len());

        let scored = scoped
            .candidates
            .par_iter()
            .map(|candidate| {
                let score = match &self.metric {
                    Some(metric) => metric.score(&scoped.target, &candidate.vector)?,
                    None => scoped.target.distance_to(&candidate.vector)?,
                };
                Ok((score, candidate.index, candidate.sample))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(rank(scored, self.ranking, k))
    }
}

/// Finds the dataset sample most similar to a query under an injected
/// similarity metric (scores rank descending).
pub struct MostSimilar<'a, S> {
    dataset: &'a [S],
    metric: Box<dyn Metric>,
}

impl<'a, S: Sample + Sync> MostSimilar<'a, S> {
    #[must_use]
    pub fn new(dataset: &'a [S], metric: Box<dyn Metric>) -> Self {
        Self { dataset, metric }
    }

    /// The single best match.
    pub fn find<T: Sample>(&self, target: &T) -> Result<&'a S> {
        self.top(1, target)?
            .neighbors()
            .first()
            .map(|n| n.sample)
            .ok_or(Error::EmptyResultSet)
    }

    /// The k most similar samples, best first.
    pub fn top<T: Sample>(&self, k: usize, target: &T) -> Result<KnnResult<'a, S>> {
        let scoped = scope_and_normalize(self.dataset, target)?;
        let k = effective_k(k, scoped.candidates.len());

        let scored = scoped
            .candidates
            .par_iter()
            .map(|candidate| {
                let score = self.metric.score(&scoped.target, &candidate.vector)?;
                Ok((score, candidate.index, candidate.sample))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(rank(scored, Ranking::Descending, k))
    }
}
