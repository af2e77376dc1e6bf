use crate::error::{Error, Result};
use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Weight assigned to a feature that was not explicitly weighted.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// The value carried by a feature.
///
/// Numeric values project into vector space; categorical values are
/// opaque payloads that compare by equality only, never by magnitude.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FeatureValue {
    Numeric(f64),
    Categorical(Value),
}

/// A named, weighted scalar descriptor of one sample.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    name: String,
    #[serde(default = "default_weight")]
    weight: f64,
    value: FeatureValue,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

impl Feature {
    /// Create a numeric feature with the default weight.
    #[must_use]
    pub fn numeric(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            weight: DEFAULT_WEIGHT,
            value: FeatureValue::Numeric(value),
        }
    }

    /// Create a categorical feature with the default weight.
    ///
    /// The original value is kept as opaque JSON. Weight is never applied
    /// to categorical matching.
    #[must_use]
    pub fn categorical(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            weight: DEFAULT_WEIGHT,
            value: FeatureValue::Categorical(value.into()),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &FeatureValue {
        &self.value
    }

    #[inline]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self.value, FeatureValue::Numeric(_))
    }

    #[inline]
    #[must_use]
    pub fn is_categorical(&self) -> bool {
        matches!(self.value, FeatureValue::Categorical(_))
    }

    /// The numeric projection of this feature.
    ///
    /// Categorical features have none; asking for one fails with
    /// [`Error::NonNumericFeature`].
    pub fn numeric_value(&self) -> Result<f64> {
        match &self.value {
            FeatureValue::Numeric(v) => Ok(*v),
            FeatureValue::Categorical(_) => Err(Error::NonNumericFeature(self.name.clone())),
        }
    }

    /// The original value: the number for numeric features, the opaque
    /// payload for categorical ones.
    #[must_use]
    pub fn original_value(&self) -> Value {
        match &self.value {
            FeatureValue::Numeric(v) => Value::from(*v),
            FeatureValue::Categorical(v) => v.clone(),
        }
    }

    /// Whether two categorical features match: their original values are
    /// equal. Names play no part in the match test, and numeric features
    /// never match.
    #[must_use]
    pub fn matches(&self, other: &Feature) -> bool {
        match (&self.value, &other.value) {
            (FeatureValue::Categorical(a), FeatureValue::Categorical(b)) => a == b,
            _ => false,
        }
    }
}

/// An entity exposing its features for comparison.
///
/// This is the ingestion boundary: adapters (hand-built feature sets,
/// deserialized records, domain types) implement it and the engines
/// consume it. Features are assembled once at construction time and read
/// in declaration order ever after.
pub trait Sample {
    /// All features, in declaration order.
    fn features(&self) -> &[Feature];

    /// Numeric features, in declaration order.
    fn numeric_features(&self) -> Vec<&Feature> {
        self.features().iter().filter(|f| f.is_numeric()).collect()
    }

    /// Categorical features, in declaration order.
    fn categorical_features(&self) -> Vec<&Feature> {
        self.features()
            .iter()
            .filter(|f| f.is_categorical())
            .collect()
    }

    /// The raw numeric projection, in declaration order.
    ///
    /// Weights are not applied here; the engines apply them after
    /// normalization.
    fn to_vector(&self) -> Vector {
        Vector::new(
            self.features()
                .iter()
                .filter_map(|f| f.numeric_value().ok())
                .collect(),
        )
    }

    /// The numeric features' weights, in declaration order.
    fn weights(&self) -> Vector {
        Vector::new(
            self.features()
                .iter()
                .filter(|f| f.is_numeric())
                .map(Feature::weight)
                .collect(),
        )
    }

    /// Look up a feature by name.
    fn feature(&self, name: &str) -> Option<&Feature> {
        self.features().iter().find(|f| f.name() == name)
    }
}

/// An owned, ordered list of features describing one entity.
///
/// Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeatureSet {
    features: Vec<Feature>,
}

impl FeatureSet {
    #[inline]
    #[must_use]
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    #[inline]
    #[must_use]
    pub fn with(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Sample for FeatureSet {
    fn features(&self) -> &[Feature] {
        &self.features
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}
