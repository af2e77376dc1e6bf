//! # simx Similarity
//!
//! Normalization and the similarity/distance metric family for the simx
//! engine.
//!
//! ## Features
//!
//! - **Min-max Normalizer**: per-column transform fit from a reference
//!   matrix, with a passthrough convention for near-constant columns
//! - **Metric strategies**: cosine, sigmoid-Euclidean, Jaccard, strict
//!   Dice, and a combinable mean-of-scorers
//! - **Gower**: both the pairwise mixed-type similarity and the distinct
//!   dataset-distance form
//!
//! ## Example
//!
//! ```rust
//! use simx_core::{Matrix, Vector};
//! use simx_similarity::{CosineMetric, Metric, Normalizer};
//!
//! let reference = Matrix::new(vec![
//!     Vector::new(vec![1.0, 10.0]),
//!     Vector::new(vec![3.0, 30.0]),
//! ]);
//! let normalizer = Normalizer::min_max(&reference).unwrap();
//!
//! let a = normalizer.normalize(&Vector::new(vec![1.0, 30.0])).unwrap();
//! let b = normalizer.normalize(&Vector::new(vec![3.0, 10.0])).unwrap();
//! let score = CosineMetric.score(&a, &b).unwrap();
//! assert!(score < 1.0);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Matrix    │────>│ Normalizer  │────>│   Vector    │
//! │ (reference) │     │ (min-max)   │     │  (0..1)     │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                               │
//!                     ┌─────────────┐           │
//!                     │   Metric    │<──────────┘
//!                     │ (strategy)  │
//!                     └─────────────┘
//! ```

pub mod gower;
pub mod metric;
pub mod normalize;

// Re-export main types for convenience
pub use gower::GowersMetric;
pub use metric::{
    CombinedMetric, CosineMetric, EuclideanMetric, JaccardMetric, Metric, StrictDiceSimilarity,
};
pub use normalize::{Normalizer, NORMALIZE_RANGE_THRESHOLD};
