use crate::error::{Error, Result};

/// calculates the euclidean distance between 2 sets of datapoints
pub fn euclidean(a_data: &[f64], b_data: &[f64]) -> f64 {
    // the lengths are expected to be checked by the caller so we just zip them
    // together for the iterator chain
    a_data
        .iter()
        .zip(b_data)
        .map(|(a, b)| (a - b).powf(2.0))
        .sum::<f64>()
        .sqrt()
}

/// calculates the manhattan distance between 2 sets of datapoints
pub fn manhattan(a_data: &[f64], b_data: &[f64]) -> f64 {
    a_data
        .iter()
        .zip(b_data)
        .map(|(a, b)| (a - b).abs())
        .sum::<f64>()
}

/// calculates the minkowski distance of order `p` between 2 sets of
/// datapoints. `p = 1` is manhattan and `p = 2` is euclidean
pub fn minkowski(a_data: &[f64], b_data: &[f64], p: f64) -> f64 {
    a_data
        .iter()
        .zip(b_data)
        .map(|(a, b)| (a - b).abs().powf(p))
        .sum::<f64>()
        .powf(p.recip())
}

/// the metric to use when calculating distances between feature vectors
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Metric {
    #[default]
    Euclidean,
    Manhattan,
    Minkowski(f64),
}

impl Metric {
    /// calculates the distance between `a` and `b` after verifying that both
    /// have the same number of features
    pub fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        if a.len() != b.len() {
            return Err(Error::DimensionMismatch {
                left: a.len(),
                right: b.len(),
            });
        }

        match *self {
            Self::Euclidean => Ok(euclidean(a, b)),
            Self::Manhattan => Ok(manhattan(a, b)),
            Self::Minkowski(p) => {
                if !p.is_finite() || p < 1.0 {
                    return Err(Error::InvalidOrder(p));
                }

                Ok(minkowski(a, b, p))
            }
        }
    }
}
