//! repeated train/test trials of a scoring model
//!
//! each trial draws a fresh 80/20 split, asks the caller to fit a model on
//! the training part and evaluates that model on the test part. the results
//! of all trials are summarized as a mean with a 95% confidence interval.
use rand::Rng;
use tracing::{debug, info};

use crate::config::TrialConfig;
use crate::error::Result;
use crate::record::FeatureRecord;
use crate::roc::{Scorer, apply_model, build_roc, threshold_sweep};
use crate::split::divide_80_20;
use crate::stats::Summary;

/// the statistics of a single trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialStats {
    pub accuracy: f64,
    pub sensitivity: f64,
    pub specificity: f64,
    pub positive_predictive_value: f64,
    pub auroc: f64,
}

/// the summary of every statistic across trials. a statistic is `None` when
/// it was undefined in every trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialSummary {
    pub accuracy: Option<Summary>,
    pub sensitivity: Option<Summary>,
    pub specificity: Option<Summary>,
    pub positive_predictive_value: Option<Summary>,
    pub auroc: Option<Summary>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrialReport {
    pub trials: Vec<TrialStats>,
    /// the weights of the fitted model for every trial that exposed them
    pub weights: Vec<Vec<f64>>,
}

impl TrialReport {
    pub fn summary(&self) -> TrialSummary {
        TrialSummary {
            accuracy: self.summarize(|trial| trial.accuracy),
            sensitivity: self.summarize(|trial| trial.sensitivity),
            specificity: self.summarize(|trial| trial.specificity),
            positive_predictive_value: self.summarize(|trial| trial.positive_predictive_value),
            auroc: self.summarize(|trial| trial.auroc),
        }
    }

    fn summarize<F>(&self, get: F) -> Option<Summary>
    where
        F: Fn(&TrialStats) -> f64,
    {
        let values: Vec<f64> = self.trials.iter().map(get).collect();

        Summary::from_values(&values)
    }

    /// one summary per weight position across the trials
    pub fn weight_summaries(&self) -> Vec<Option<Summary>> {
        let width = self.weights.iter().map(Vec::len).max().unwrap_or(0);

        (0..width)
            .map(|position| {
                let values: Vec<f64> = self
                    .weights
                    .iter()
                    .filter_map(|weights| weights.get(position).copied())
                    .collect();

                Summary::from_values(&values)
            })
            .collect()
    }
}

/// runs `config.trials` trials, fitting a model with `fit` for each one
pub fn run_trials<L, R, F, S>(
    examples: &[FeatureRecord<L>],
    positive: &L,
    config: &TrialConfig,
    rng: &mut R,
    mut fit: F,
) -> Result<TrialReport>
where
    L: PartialEq + Clone,
    R: Rng + ?Sized,
    F: FnMut(&[FeatureRecord<L>]) -> S,
    S: Scorer,
{
    let thresholds = threshold_sweep(config.sweep_step)?;
    let mut report = TrialReport::default();

    for trial in 0..config.trials {
        let (training, test_set) = divide_80_20(examples, rng);
        let model = fit(&training);

        let counts = apply_model(&model, &test_set, positive, config.threshold);
        let curve = build_roc(&model, &test_set, positive, &thresholds);

        let stats = TrialStats {
            accuracy: counts.accuracy(),
            sensitivity: counts.sensitivity(),
            specificity: counts.specificity(),
            positive_predictive_value: counts.positive_predictive_value(),
            auroc: curve.auroc,
        };

        debug!(
            trial,
            accuracy = stats.accuracy,
            auroc = stats.auroc,
            "trial complete"
        );

        if let Some(weights) = model.weights() {
            report.weights.push(weights);
        }

        report.trials.push(stats);
    }

    info!(trials = report.trials.len(), "trials complete");

    Ok(report)
}
