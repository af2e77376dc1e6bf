//! # simx
//!
//! A feature-vector similarity and k-nearest-neighbor engine for mixed
//! numeric and categorical data.
//!
//! simx compares heterogeneous samples - anything describable as a list
//! of named, weighted features - without hand-rolled normalization or
//! distance math: column-wise min-max scaling, a family of pluggable
//! similarity/distance metrics (cosine, sigmoid-Euclidean, Jaccard,
//! strict Dice, Gower), and brute-force KNN engines with deterministic
//! ranking and majority-vote aggregation.
//!
//! ## Quick Start
//!
//! ```rust
//! use simx::prelude::*;
//!
//! let people = vec![
//!     FeatureSet::default()
//!         .with(Feature::numeric("height", 5.0))
//!         .with(Feature::numeric("age", 45.0))
//!         .with(Feature::categorical("team", "red")),
//!     FeatureSet::default()
//!         .with(Feature::numeric("height", 5.6))
//!         .with(Feature::numeric("age", 30.0))
//!         .with(Feature::categorical("team", "blue")),
//!     FeatureSet::default()
//!         .with(Feature::numeric("height", 5.8))
//!         .with(Feature::numeric("age", 36.0))
//!         .with(Feature::categorical("team", "blue")),
//! ];
//!
//! let query = FeatureSet::default()
//!     .with(Feature::numeric("height", 5.7))
//!     .with(Feature::numeric("age", 33.0));
//!
//! let result = Knn::new(&people, 3).fit(&query).unwrap();
//! let team = result.classify("team").unwrap();
//! assert_eq!(team.value, "blue");
//! ```
//!
//! ## Crate Structure
//!
//! simx is composed of several crates:
//!
//! - [`simx-core`](https://docs.rs/simx-core) - Vector/Matrix algebra, features, samples
//! - [`simx-similarity`](https://docs.rs/simx-similarity) - Normalization and the metric family
//! - [`simx-knn`](https://docs.rs/simx-knn) - KNN engines and result aggregation
//!
//! ## Design
//!
//! - **Stateless queries**: every classification call refits its
//!   normalizer from the supplied dataset; nothing is persisted or
//!   shared between queries
//! - **Mixed data**: categorical features compare by original-value
//!   equality and blend with numeric columns through Gower scoring
//! - **Deterministic**: scoring runs in parallel, ranking is a stable
//!   order on (score, dataset index)

// Re-export core types
pub use simx_core::{
    Error, Result,
    Vector, Matrix, MinMax,
    Feature, FeatureSet, FeatureValue, Sample,
    Probability, DEFAULT_WEIGHT,
};

// Re-export metrics and normalization
pub use simx_similarity::{
    CombinedMetric, CosineMetric, EuclideanMetric, GowersMetric, JaccardMetric, Metric,
    Normalizer, StrictDiceSimilarity, NORMALIZE_RANGE_THRESHOLD,
};

// Re-export engines
pub use simx_knn::{
    Classification, Knn, KnnMixedData, KnnRegression, KnnResult, MostSimilar, Neighbor, Ranking,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Error, Result,
        Vector, Matrix, MinMax,
        Feature, FeatureSet, FeatureValue, Sample,
        Probability,
        CombinedMetric, CosineMetric, EuclideanMetric, GowersMetric, JaccardMetric, Metric,
        Normalizer, StrictDiceSimilarity,
        Classification, Knn, KnnMixedData, KnnRegression, KnnResult, MostSimilar, Neighbor,
        Ranking,
    };
}
