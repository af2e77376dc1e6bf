//! # simx Core
//!
//! Core library for the simx similarity engine.
//!
//! This crate provides the fundamental data structures and algebra:
//!
//! - [`Vector`] - Immutable f64 vector with norm, distance and column statistics
//! - [`Matrix`] - Ordered row vectors with transpose and column reductions
//! - [`MinMax`] - Per-column (min, max) pair with the zero-range convention
//! - [`Feature`] / [`FeatureSet`] - Named, weighted numeric or categorical descriptors
//! - [`Sample`] - The ingestion boundary: anything exposing an ordered feature list
//! - [`Probability`] - Vote-share value object
//!
//! ## Example
//!
//! ```rust
//! use simx_core::{Feature, FeatureSet, Sample, Vector};
//!
//! let person = FeatureSet::default()
//!     .with(Feature::numeric("age", 35.0))
//!     .with(Feature::numeric("height", 5.5))
//!     .with(Feature::categorical("gender", "f"));
//!
//! assert_eq!(person.to_vector(), Vector::new(vec![35.0, 5.5]));
//! assert_eq!(person.categorical_features().len(), 1);
//! ```

pub mod error;
pub mod feature;
pub mod matrix;
pub mod probability;
pub mod vector;

pub use error::{Error, Result};
pub use feature::{Feature, FeatureSet, FeatureValue, Sample, DEFAULT_WEIGHT};
pub use matrix::Matrix;
pub use probability::Probability;
pub use vector::{MinMax, Vector};
