use crate::error::{Error, Result};
use crate::record::FeatureRecord;
use crate::stats::ConfusionCounts;

/// a first degree polynomial `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// how far `y` lies from the line at `x`
    pub fn residual(&self, x: f64, y: f64) -> f64 {
        (y - self.predict(x)).abs()
    }
}

/// predicts positive for every test record whose `y_index` feature lies
/// strictly closer to `positive_model` than to `negative_model` at its
/// `x_index` feature
pub fn nearest_line_classify<L>(
    positive_model: &LinearModel,
    negative_model: &LinearModel,
    test_set: &[FeatureRecord<L>],
    positive: &L,
    x_index: usize,
    y_index: usize,
) -> Result<ConfusionCounts>
where
    L: PartialEq,
{
    let mut counts = ConfusionCounts::default();

    for record in test_set {
        let features = record.features();

        let (Some(&x), Some(&y)) = (features.get(x_index), features.get(y_index)) else {
            return Err(Error::FeatureIndex {
                index: std::cmp::max(x_index, y_index),
                dimension: features.len(),
            });
        };

        let predicted = positive_model.residual(x, y) < negative_model.residual(x, y);

        counts.record(predicted, record.label() == positive);
    }

    Ok(counts)
}
