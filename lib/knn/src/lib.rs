//! # simx KNN
//!
//! k-nearest-neighbor engines for the simx similarity engine.
//!
//! Every engine runs the same stateless pipeline per query: scope the
//! dataset to the query's numeric features, fit a fresh min-max
//! normalizer, weight by the query's feature weights, score every sample
//! (in parallel), rank deterministically, and keep the top k. The
//! engines differ in how they score and what the result is reduced to:
//!
//! - [`Knn`] - distance to the query, majority-vote classification via
//!   [`KnnResult::classify`]
//! - [`KnnRegression`] - numeric prediction as the mean of the top-k raw
//!   vectors
//! - [`KnnMixedData`] - Gower distance over mixed numeric + categorical
//!   samples
//! - [`MostSimilar`] - best match under an injected similarity metric
//!
//! ## Example
//!
//! ```rust
//! use simx_core::{Feature, FeatureSet};
//! use simx_knn::Knn;
//!
//! let dataset = vec![
//!     FeatureSet::default()
//!         .with(Feature::numeric("age", 30.0))
//!         .with(Feature::categorical("likes_jazz", "yes")),
//!     FeatureSet::default()
//!         .with(Feature::numeric("age", 60.0))
//!         .with(Feature::categorical("likes_jazz", "no")),
//!     FeatureSet::default()
//!         .with(Feature::numeric("age", 33.0))
//!         .with(Feature::categorical("likes_jazz", "yes")),
//! ];
//!
//! let query = FeatureSet::default().with(Feature::numeric("age", 31.0));
//! let result = Knn::new(&dataset, 3).fit(&query).unwrap();
//! let answer = result.classify("likes_jazz").unwrap();
//! assert_eq!(answer.value, "yes");
//! ```

pub mod knn;
pub mod mixed;
pub(crate) mod pipeline;
pub mod regression;
pub mod result;

pub use knn::{Knn, MostSimilar, Ranking};
pub use mixed::KnnMixedData;
pub use regression::KnnRegression;
pub use result::{Classification, KnnResult, Neighbor};
