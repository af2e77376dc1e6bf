//! The shared front half of every query: scope the dataset to the
//! query's numeric features, fit a fresh normalizer, and weight the
//! normalized vectors.
//!
//! Nothing here is cached between queries; fitting is cheap and scoped
//! per call, so concurrent queries never interfere.

use crate::knn::Ranking;
use crate::result::{KnnResult, Neighbor};
use ordered_float::OrderedFloat;
use simx_core::{Feature, Matrix, Result, Sample, Vector};
use simx_similarity::Normalizer;
use std::cmp::Reverse;
use tracing::{debug, warn};

/// A dataset sample admitted to a query: its original index and its
/// scoped, normalized, weighted vector.
pub(crate) struct Candidate<'a, S> {
    pub index: usize,
    pub sample: &'a S,
    pub vector: Vector,
}

/// The query-scoped view of a dataset.
pub(crate) struct ScopedQuery<'a, S> {
    /// The query's normalized, weighted vector.
    pub target: Vector,
    pub candidates: Vec<Candidate<'a, S>>,
}

/// Restrict every sample to the query's numeric feature names, fit a
/// min-max normalizer over the scoped matrix, and weight everything by
/// the query's feature weights.
///
/// A sample missing any of the query's numeric features cannot occupy
/// every column and drops out of candidacy; missing features are never
/// zero-filled.
pub(crate) fn scope_and_normalize<'a, S, T>(
    dataset: &'a [S],
    target: &T,
) -> Result<ScopedQuery<'a, S>>
where
    S: Sample,
    T: Sample,
{
    let names: Vec<&str> = target
        .features()
        .iter()
        .filter(|f| f.is_numeric())
        .map(Feature::name)
        .collect();

    let mut scoped: Vec<(usize, &'a S, Vector)> = Vec::with_capacity(dataset.len());
    for (index, sample) in dataset.iter().enumerate() {
        match scoped_vector(sample, &names) {
            Some(vector) => scoped.push((index, sample, vector)),
            None => debug!(index, "sample misses query features, skipped"),
        }
    }

    let weights = target.weights();
    if scoped.is_empty() {
        return Ok(ScopedQuery {
            target: target.to_vector().multiply(&weights)?,
            candidates: Vec::new(),
        });
    }

    let matrix = Matrix::new(scoped.iter().map(|(_, _, v)| v.clone()).collect());
    let normalizer = Normalizer::min_max(&matrix)?;

    let target_vector = normalizer.normalize(&target.to_vector())?.multiply(&weights)?;
    let candidates = scoped
        .into_iter()
        .map(|(index, sample, vector)| {
            Ok(Candidate {
                index,
                sample,
                vector: normalizer.normalize(&vector)?.multiply(&weights)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ScopedQuery {
        target: target_vector,
        candidates,
    })
}

fn scoped_vector<S: Sample>(sample: &S, names: &[&str]) -> Option<Vector> {
    let mut data = Vec::with_capacity(names.len());
    for name in names {
        data.push(sample.feature(name)?.numeric_value().ok()?);
    }
    Some(Vector::new(data))
}

/// Clamp `k` to the available sample count and warn on the advisory
/// conditions; neither aborts the query.
pub(crate) fn effective_k(k: usize, available: usize) -> usize {
    if k % 2 == 0 {
        warn!(k, "even k can produce voting ties");
    }
    if k > available {
        warn!(k, available, "k exceeds the dataset size, clamping");
        return available;
    }
    k
}

/// Order scored samples on `(score, original index)` and keep the top k.
///
/// The composite key makes the order deterministic regardless of how the
/// scores were computed, and ties on score preserve dataset order.
pub(crate) fn rank<'a, S>(
    mut scored: Vec<(f64, usize, &'a S)>,
    ranking: Ranking,
    k: usize,
) -> KnnResult<'a, S> {
    match ranking {
        Ranking::Ascending => {
            scored.sort_by_key(|(score, index, _)| (OrderedFloat(*score), *index));
        }
        Ranking::Descending => {
            scored.sort_by_key(|(score, index, _)| (Reverse(OrderedFloat(*score)), *index));
        }
    }
    scored.truncate(k);
    KnnResult::new(
        scored
            .into_iter()
            .map(|(score, _, sample)| Neighbor { sample, score })
            .collect(),
    )
}
