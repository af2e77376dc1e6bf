//! Gower scoring for mixed numeric + categorical samples.
//!
//! Two distinct operations share the Gower name and both are kept:
//!
//! - [`GowersMetric::score_samples`] - pairwise *similarity* between two
//!   samples: the mean of a numeric subscore and a categorical-match
//!   subscore (higher = more similar).
//! - [`GowersMetric::row_distances`] - *distance* from a target to every
//!   row of a dataset: range-scaled absolute differences blended with
//!   categorical mismatch indicators (lower = more similar).
//!
//! They compute conceptually different things and are deliberately not
//! unified.

use crate::metric::{CosineMetric, Metric, StrictDiceSimilarity};
use rayon::prelude::*;
use simx_core::{Feature, MinMax, Result, Sample, Vector};

/// Composite metric for samples carrying both numeric and categorical
/// features.
pub struct GowersMetric {
    numeric: Box<dyn Metric>,
    categorical: Box<dyn Metric>,
}

impl GowersMetric {
    /// Blend a caller-supplied numeric metric with a categorical-match
    /// metric.
    #[must_use]
    pub fn new(numeric: Box<dyn Metric>, categorical: Box<dyn Metric>) -> Self {
        Self {
            numeric,
            categorical,
        }
    }

    /// Pairwise mixed similarity: `(numeric + categorical) / 2`.
    ///
    /// Both subscores are scoped by the target: the numeric metric runs
    /// over the feature names present in both samples (in the target's
    /// declaration order), and the categorical metric runs over binary
    /// match vectors for the target's categorical features (a position is
    /// 1 when the other sample's same-named feature carries an equal
    /// original value). Features absent from the target never
    /// participate.
    pub fn score_samples(&self, target: &dyn Sample, other: &dyn Sample) -> Result<f64> {
        let mut mine = Vec::new();
        let mut theirs = Vec::new();
        for feature in target.numeric_features() {
            let Some(found) = other.feature(feature.name()) else {
                continue;
            };
            if let Ok(value) = found.numeric_value() {
                mine.push(feature.numeric_value()?);
                theirs.push(value);
            }
        }
        let numeric_score = if mine.is_empty() {
            0.0
        } else {
            self.numeric
                .score(&Vector::new(mine), &Vector::new(theirs))?
        };

        let mut matches_target = Vec::new();
        let mut matches_other = Vec::new();
        for feature in target.categorical_features() {
            matches_target.push(1.0);
            let matched = other
                .feature(feature.name())
                .is_some_and(|found| feature.matches(found));
            matches_other.push(if matched { 1.0 } else { 0.0 });
        }
        let categorical_score = if matches_target.is_empty() {
            0.0
        } else {
            self.categorical
                .score(&Vector::new(matches_target), &Vector::new(matches_other))?
        };

        Ok((numeric_score + categorical_score) / 2.0)
    }

    /// Gower distance from `target` to every dataset row, in dataset
    /// order (lower = more similar).
    ///
    /// Each row's distance is the mean over all participating columns:
    /// `|row - target| / (max - min)` per numeric column (ranges observed
    /// over the rows that carry the column) and a 0/1 mismatch indicator
    /// per categorical feature of the target. A row missing a numeric
    /// column drops that column from its mean; a missing categorical
    /// feature counts as a mismatch. A row sharing no columns with the
    /// target scores the worst distance, 1.
    pub fn row_distances<S, T>(dataset: &[S], target: &T) -> Result<Vec<f64>>
    where
        S: Sample + Sync,
        T: Sample + Sync,
    {
        let mut numeric_targets = Vec::new();
        for feature in target.numeric_features() {
            numeric_targets.push((feature.name(), feature.numeric_value()?));
        }
        let categorical_targets: Vec<&Feature> = target.categorical_features();

        // observed range per target column, over the rows that carry it
        let ranges: Vec<MinMax> = numeric_targets
            .iter()
            .map(|(name, _)| {
                let observed: Vec<f64> = dataset
                    .iter()
                    .filter_map(|row| row.feature(name))
                    .filter_map(|f| f.numeric_value().ok())
                    .collect();
                Vector::new(observed).min_max()
            })
            .collect();

        let distances = dataset
            .par_iter()
            .map(|row| {
                let mut total = 0.0;
                let mut terms = 0usize;
                for ((name, value), range) in numeric_targets.iter().zip(&ranges) {
                    let Some(found) = row.feature(name) else {
                        continue;
                    };
                    if let Ok(observed) = found.numeric_value() {
                        total += (observed - value).abs() / range.difference();
                        terms += 1;
                    }
                }
                for feature in &categorical_targets {
                    let matched = row
                        .feature(feature.name())
                        .is_some_and(|found| feature.matches(found));
                    if !matched {
                        total += 1.0;
                    }
                    terms += 1;
                }
                if terms == 0 {
                    1.0
                } else {
                    total / terms as f64
                }
            })
            .collect();

        Ok(distances)
    }
}

impl Default for GowersMetric {
    /// The documented default blend: cosine over the numeric projection,
    /// strict Dice over the categorical matches.
    fn default() -> Self {
        Self::new(Box::new(CosineMetric), Box::new(StrictDiceSimilarity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simx_core::FeatureSet;

    fn person(age: f64, height: f64, income: f64, race: &str, gender: &str, politic: &str) -> FeatureSet {
        FeatureSet::default()
            .with(Feature::numeric("age", age))
            .with(Feature::numeric("height", height))
            .with(Feature::numeric("income", income))
            .with(Feature::categorical("race", race))
            .with(Feature::categorical("gender", gender))
            .with(Feature::categorical("politic", politic))
    }

    fn people() -> Vec<FeatureSet> {
        vec![
            person(30.0, 5.8, 60_000.0, "white", "m", "dem"),
            person(35.0, 5.5, 65_000.0, "asian", "f", "dem"),
            person(40.0, 5.9, 70_000.0, "asian", "m", "rep"),
            person(28.0, 5.4, 50_000.0, "white", "f", "dem"),
        ]
    }

    #[test]
    fn test_pairwise_score() {
        let target = FeatureSet::default()
            .with(Feature::numeric("age", 1.0))
            .with(Feature::numeric("height", 2.0))
            .with(Feature::categorical("gender", "f"))
            .with(Feature::categorical("politic", "dem"));
        let other = FeatureSet::default()
            .with(Feature::numeric("age", 2.0))
            .with(Feature::numeric("height", 4.0))
            .with(Feature::categorical("gender", "f"))
            .with(Feature::categorical("politic", "rep"));

        // numeric: cosine([1,2],[2,4]) = 1; categorical: one of two match
        let score = GowersMetric::default()
            .score_samples(&target, &other)
            .unwrap();
        assert!((score - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_pairwise_identical_samples() {
        let sample = person(35.0, 5.5, 65_000.0, "asian", "f", "dem");
        let score = GowersMetric::default()
            .score_samples(&sample, &sample)
            .unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pairwise_scoped_by_target() {
        let target = FeatureSet::default()
            .with(Feature::numeric("age", 1.0))
            .with(Feature::categorical("gender", "f"));
        // extra features on the other side are ignored
        let other = FeatureSet::default()
            .with(Feature::numeric("age", 2.0))
            .with(Feature::numeric("income", 90_000.0))
            .with(Feature::categorical("gender", "f"))
            .with(Feature::categorical("politic", "rep"));

        let score = GowersMetric::default()
            .score_samples(&target, &other)
            .unwrap();
        // cosine([1],[2]) = 1, all target categories match
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_row_distances_people() {
        let dataset = people();
        let target = person(35.0, 5.5, 65_000.0, "asian", "f", "dem");
        let distances = GowersMetric::row_distances(&dataset, &target).unwrap();

        assert_eq!(distances.len(), 4);
        assert!((distances[0] - 0.544_444_4).abs() < 1e-6);
        assert!(distances[1].abs() < 1e-9);
        assert!((distances[2] - 0.577_777_8).abs() < 1e-6);
        assert!((distances[3] - 0.422_222_2).abs() < 1e-6);
    }

    #[test]
    fn test_row_distances_missing_numeric_column_drops_out() {
        let dataset = vec![
            FeatureSet::default()
                .with(Feature::numeric("age", 20.0))
                .with(Feature::categorical("race", "white")),
            FeatureSet::default()
                .with(Feature::numeric("age", 40.0))
                .with(Feature::numeric("height", 5.0))
                .with(Feature::categorical("race", "asian")),
        ];
        let target = FeatureSet::default()
            .with(Feature::numeric("age", 40.0))
            .with(Feature::numeric("height", 5.0))
            .with(Feature::categorical("race", "asian"));

        let distances = GowersMetric::row_distances(&dataset, &target).unwrap();
        // row 0: age term 1.0 + race mismatch 1.0 over two terms
        assert!((distances[0] - 1.0).abs() < 1e-9);
        assert!(distances[1].abs() < 1e-9);
    }
}
