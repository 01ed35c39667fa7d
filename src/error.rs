use thiserror::Error;

/// errors produced while evaluating classifiers
///
/// a zero denominator in a statistic is not an error. those ratios come back
/// as [`f64::NAN`] instead, refer to [`crate::stats::ConfusionCounts`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("feature vectors differ in length. left: {left} right: {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("pool is smaller than the requested neighbors. k: {k} pool: {pool}")]
    InsufficientPoolSize { k: usize, pool: usize },

    #[error("k value cannot be 0")]
    ZeroK,

    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("test fraction must be between 0 and 1. given: {0}")]
    InvalidFraction(f64),

    #[error("threshold step must be within [0.0001, 1]. given: {0}")]
    InvalidStep(f64),

    #[error("minkowski order must be a finite value >= 1. given: {0}")]
    InvalidOrder(f64),

    #[error("feature index is out of range. index: {index} dimension: {dimension}")]
    FeatureIndex { index: usize, dimension: usize },

    #[error("cabin class must be 1, 2 or 3. given: {0}")]
    InvalidCabinClass(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
