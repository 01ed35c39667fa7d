//! confusion matrix statistics and trial aggregation
//!
//! every ratio uses the same convention: when its denominator is zero the
//! result is [`f64::NAN`] rather than an error. aggregation through
//! [`Summary::from_values`] skips those undefined values explicitly so a
//! single trial without positives does not poison an average.
use std::fmt;

/// the 2x2 tally of predictions against the true labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    pub true_positive: u64,
    pub false_positive: u64,
    pub true_negative: u64,
    pub false_negative: u64,
}

impl ConfusionCounts {
    pub fn new(
        true_positive: u64,
        false_positive: u64,
        true_negative: u64,
        false_negative: u64,
    ) -> Self {
        Self {
            true_positive,
            false_positive,
            true_negative,
            false_negative,
        }
    }

    /// increments exactly one counter for a single prediction
    pub fn record(&mut self, predicted_positive: bool, actually_positive: bool) {
        match (predicted_positive, actually_positive) {
            (true, true) => self.true_positive += 1,
            (true, false) => self.false_positive += 1,
            (false, false) => self.true_negative += 1,
            (false, true) => self.false_negative += 1,
        }
    }

    /// the number of predictions tallied
    pub fn total(&self) -> u64 {
        self.true_positive + self.false_positive + self.true_negative + self.false_negative
    }

    /// NaN when nothing has been tallied
    pub fn accuracy(&self) -> f64 {
        ratio(self.true_positive + self.true_negative, self.total())
    }

    pub fn sensitivity(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }

    pub fn specificity(&self) -> f64 {
        ratio(self.true_negative, self.true_negative + self.false_positive)
    }

    pub fn positive_predictive_value(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    pub fn negative_predictive_value(&self) -> f64 {
        ratio(self.true_negative, self.true_negative + self.false_negative)
    }

    pub fn statistics(&self) -> DerivedStatistics {
        DerivedStatistics {
            accuracy: self.accuracy(),
            sensitivity: self.sensitivity(),
            specificity: self.specificity(),
            positive_predictive_value: self.positive_predictive_value(),
            negative_predictive_value: self.negative_predictive_value(),
        }
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        f64::NAN
    } else {
        numerator as f64 / denominator as f64
    }
}

/// the statistics derived from a single [`ConfusionCounts`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStatistics {
    pub accuracy: f64,
    pub sensitivity: f64,
    pub specificity: f64,
    pub positive_predictive_value: f64,
    pub negative_predictive_value: f64,
}

impl fmt::Display for DerivedStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accuracy: {:.3}", self.accuracy)?;
        writeln!(f, "Sensitivity: {:.3}", self.sensitivity)?;
        writeln!(f, "Specificity: {:.3}", self.specificity)?;
        writeln!(
            f,
            "Positive Predictive Value: {:.3}",
            self.positive_predictive_value
        )?;
        write!(
            f,
            "Negative Predictive Value: {:.3}",
            self.negative_predictive_value
        )
    }
}

/// arithmetic mean, NaN for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

/// population variance, NaN for an empty slice
pub fn variance(values: &[f64]) -> f64 {
    let mean = mean(values);

    values.iter().map(|v| (v - mean).powf(2.0)).sum::<f64>() / values.len() as f64
}

pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// mean and 95% confidence interval of a statistic gathered over repeated
/// trials
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    /// half width of the interval, `1.96` standard deviations
    pub ci95: f64,
    /// number of defined values that were used
    pub trials: usize,
    /// number of NaN values that were left out
    pub skipped: usize,
}

impl Summary {
    /// summarizes the defined values, returning `None` when every value is
    /// NaN or the slice is empty
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let defined: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();

        if defined.is_empty() {
            return None;
        }

        Some(Self {
            mean: mean(&defined),
            ci95: 1.96 * std_dev(&defined),
            trials: defined.len(),
            skipped: values.len() - defined.len(),
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean = {:.3}, 95% confidence interval = {:.3}",
            self.mean, self.ci95
        )
    }
}
