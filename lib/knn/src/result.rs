//! Ranked neighbors and the aggregations that turn them into an answer:
//! majority-vote classification, numeric prediction, and multi-label
//! one-hot decoding.

use ahash::AHashMap;
use serde::Serialize;
use serde_json::Value;
use simx_core::{Error, Probability, Result, Sample};
use std::cmp::Reverse;

/// One ranked neighbor: a borrowed dataset sample and its score under
/// the engine's metric.
#[derive(Debug, Clone)]
pub struct Neighbor<'a, S> {
    pub sample: &'a S,
    pub score: f64,
}

/// The k nearest raw samples for one query, ranked best first.
///
/// Immutable once built; aggregation reads it without consuming it.
#[derive(Debug, Clone)]
pub struct KnnResult<'a, S> {
    neighbors: Vec<Neighbor<'a, S>>,
}

/// A categorical classification with its vote share.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Classification {
    /// The winning original value.
    pub value: Value,
    /// Votes the winner received.
    pub votes: usize,
    /// The winner's share of all votes cast for the feature.
    pub probability: Probability,
}

impl<'a, S> KnnResult<'a, S> {
    pub(crate) fn new(neighbors: Vec<Neighbor<'a, S>>) -> Self {
        Self { neighbors }
    }

    #[inline]
    #[must_use]
    pub fn neighbors(&self) -> &[Neighbor<'a, S>] {
        &self.neighbors
    }

    /// The ranked samples themselves, best first.
    pub fn samples(&self) -> impl Iterator<Item = &'a S> + '_ {
        self.neighbors.iter().map(|n| n.sample)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

impl<'a, S: Sample> KnnResult<'a, S> {
    /// Majority vote over the named categorical feature.
    ///
    /// Groups the neighbors' original values, counts occurrences, and
    /// returns the most frequent; a tie goes to the value encountered
    /// first in rank order. Fails with [`Error::NoSuitableCategory`] if
    /// no neighbor carries the feature.
    pub fn classify(&self, feature_name: &str) -> Result<Classification> {
        if self.is_empty() {
            return Err(Error::EmptyResultSet);
        }

        // key by the value's JSON text: Value itself is not hashable
        let mut groups: AHashMap<String, (Value, usize, usize)> = AHashMap::new();
        let mut total = 0usize;
        for (position, sample) in self.samples().enumerate() {
            let Some(feature) = sample.feature(feature_name) else {
                continue;
            };
            if !feature.is_categorical() {
                continue;
            }
            let value = feature.original_value();
            let entry = groups
                .entry(value.to_string())
                .or_insert((value, 0, position));
            entry.1 += 1;
            total += 1;
        }
        if total == 0 {
            return Err(Error::NoSuitableCategory(feature_name.to_string()));
        }

        let mut counted: Vec<(Value, usize, usize)> = groups.into_values().collect();
        counted.sort_by_key(|(_, count, first_seen)| (Reverse(*count), *first_seen));
        let (value, votes, _) = counted.swap_remove(0);
        Ok(Classification {
            value,
            votes,
            probability: Probability::from_ratio(votes, total)?,
        })
    }

    /// Arithmetic mean of the named numeric feature over the neighbors
    /// that carry it.
    pub fn predict(&self, feature_name: &str) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::EmptyResultSet);
        }
        let mut total = 0.0;
        let mut count = 0usize;
        for sample in self.samples() {
            if let Some(feature) = sample.feature(feature_name) {
                if let Ok(value) = feature.numeric_value() {
                    total += value;
                    count += 1;
                }
            }
        }
        if count == 0 {
            return Err(Error::NoSuitableCategory(feature_name.to_string()));
        }
        Ok(total / count as f64)
    }

    /// Multi-label plurality decode over one-hot indicator features.
    ///
    /// Every distinct feature name accepted by `matcher` is voted on by
    /// the neighbors carrying it, grouping by the boolean original
    /// value. Names whose winning value is `true` come back as the
    /// re-activated labels, ordered by true-vote count descending; a
    /// 50/50 split goes to the value observed first in rank order.
    pub fn classify_one_hot(&self, matcher: impl Fn(&str) -> bool) -> Result<Vec<String>> {
        if self.is_empty() {
            return Err(Error::EmptyResultSet);
        }

        struct LabelVotes {
            active: usize,
            inactive: usize,
            first_seen: usize,
            first_active: bool,
        }

        let mut groups: AHashMap<String, LabelVotes> = AHashMap::new();
        let mut position = 0usize;
        for sample in self.samples() {
            for feature in sample.categorical_features() {
                if !matcher(feature.name()) {
                    continue;
                }
                let active = feature.original_value() == Value::Bool(true);
                let votes = groups
                    .entry(feature.name().to_string())
                    .or_insert(LabelVotes {
                        active: 0,
                        inactive: 0,
                        first_seen: position,
                        first_active: active,
                    });
                if active {
                    votes.active += 1;
                } else {
                    votes.inactive += 1;
                }
                position += 1;
            }
        }

        let mut decoded: Vec<(String, LabelVotes)> = groups
            .into_iter()
            .filter(|(_, votes)| {
                votes.active > votes.inactive
                    || (votes.active == votes.inactive && votes.first_active)
            })
            .collect();
        decoded.sort_by_key(|(_, votes)| (Reverse(votes.active), votes.first_seen));
        Ok(decoded.into_iter().map(|(name, _)| name).collect())
    }
}
