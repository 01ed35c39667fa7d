use crate::distance::Metric;
use crate::error::Result;

/// a labeled feature vector used for training and testing classifiers
///
/// the fields are private so a record cannot change once it has been built.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord<L> {
    features: Vec<f64>,
    label: L,
}

impl<L> FeatureRecord<L> {
    pub fn new<F>(features: F, label: L) -> Self
    where
        F: Into<Vec<f64>>,
    {
        Self {
            features: features.into(),
            label,
        }
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// the number of features stored in the record
    pub fn dimension(&self) -> usize {
        self.features.len()
    }

    /// euclidean distance between the features of two records
    pub fn distance(&self, other: &Self) -> Result<f64> {
        self.distance_with(other, Metric::Euclidean)
    }

    pub fn distance_with(&self, other: &Self, metric: Metric) -> Result<f64> {
        metric.distance(&self.features, &other.features)
    }
}
