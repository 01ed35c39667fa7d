//! threshold based evaluation of scoring models and ROC curves
use tracing::warn;

use crate::error::{Error, Result};
use crate::record::FeatureRecord;
use crate::stats::ConfusionCounts;

/// a fitted model that produces the probability of the positive class for a
/// feature vector
///
/// fitting happens outside of this crate, anything able to score a feature
/// vector can be evaluated. plain closures work as well.
pub trait Scorer {
    /// probability in `[0, 1]` that the features belong to the positive class
    fn score(&self, features: &[f64]) -> f64;

    /// the coefficients of the model, one per feature, if it exposes them
    fn weights(&self) -> Option<Vec<f64>> {
        None
    }
}

impl<F> Scorer for F
where
    F: Fn(&[f64]) -> f64,
{
    fn score(&self, features: &[f64]) -> f64 {
        self(features)
    }
}

/// predicts positive for every test record whose score is strictly greater
/// than `threshold`
pub fn apply_model<S, L>(
    model: &S,
    test_set: &[FeatureRecord<L>],
    positive: &L,
    threshold: f64,
) -> ConfusionCounts
where
    S: Scorer + ?Sized,
    L: PartialEq,
{
    let mut counts = ConfusionCounts::default();

    for record in test_set {
        let predicted = model.score(record.features()) > threshold;

        counts.record(predicted, record.label() == positive);
    }

    counts
}

/// the smallest step accepted by [`threshold_sweep`], at most 10,001
/// thresholds
pub const MIN_SWEEP_STEP: f64 = 1e-4;

/// evenly spaced thresholds from `0.0` up to and including `1.0`
///
/// values are calculated as multiples of `step` so they do not drift the way
/// repeated addition does. `step` must be within `[MIN_SWEEP_STEP, 1]`.
pub fn threshold_sweep(step: f64) -> Result<Vec<f64>> {
    if step.is_nan() || step < MIN_SWEEP_STEP || step > 1.0 {
        return Err(Error::InvalidStep(step));
    }

    let mut rtn = Vec::with_capacity((1.0 / step).ceil() as usize + 1);
    let mut index = 0usize;

    loop {
        let p = index as f64 * step;

        // stop just short of 1 so the final endpoint is exact
        if p >= 1.0 - step * 1e-6 {
            break;
        }

        rtn.push(p);
        index += 1;
    }

    rtn.push(1.0);

    Ok(rtn)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocPoint {
    pub threshold: f64,
    /// `1 - specificity`
    pub false_positive_rate: f64,
    /// sensitivity
    pub true_positive_rate: f64,
}

impl RocPoint {
    /// false when the test set lacked one of the classes at this threshold
    pub fn is_defined(&self) -> bool {
        !self.false_positive_rate.is_nan() && !self.true_positive_rate.is_nan()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RocCurve {
    /// one point per threshold in the order they were swept
    pub points: Vec<RocPoint>,
    pub auroc: f64,
}

/// sweeps the thresholds over `test_set` and records one ROC point for each
pub fn build_roc<S, L>(
    model: &S,
    test_set: &[FeatureRecord<L>],
    positive: &L,
    thresholds: &[f64],
) -> RocCurve
where
    S: Scorer + ?Sized,
    L: PartialEq,
{
    let mut points = Vec::with_capacity(thresholds.len());

    for &threshold in thresholds {
        let counts = apply_model(model, test_set, positive, threshold);

        points.push(RocPoint {
            threshold,
            false_positive_rate: 1.0 - counts.specificity(),
            true_positive_rate: counts.sensitivity(),
        });
    }

    let undefined = points
        .iter()
        .filter(|point| !point.is_defined())
        .count();

    if undefined > 0 {
        warn!(
            undefined,
            total = points.len(),
            "roc points are undefined, test set lacks one of the classes"
        );
    }

    let auroc = auc(
        &points
            .iter()
            .map(|point| (point.false_positive_rate, point.true_positive_rate))
            .collect::<Vec<_>>(),
    );

    RocCurve { points, auroc }
}

/// unsigned trapezoidal area under a curve of `(x, y)` points
///
/// points are sorted by x (then y) before integrating so a curve that is not
/// monotonic in the order it was produced is measured left to right. points
/// with a NaN coordinate are left out and fewer than two defined points
/// results in NaN.
pub fn auc(points: &[(f64, f64)]) -> f64 {
    let mut defined: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
        .collect();

    if defined.len() < 2 {
        return f64::NAN;
    }

    defined.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    defined
        .windows(2)
        .map(|pair| (pair[1].0 - pair[0].0).abs() * (pair[0].1 + pair[1].1) / 2.0)
        .sum()
}
