use rand::Rng;
use tracing::{info, instrument};

use crate::classify::knn_classify;
use crate::config::TuningConfig;
use crate::error::Result;
use crate::record::FeatureRecord;
use crate::split::{divide_80_20, downsample};
use crate::stats;

/// the average accuracy measured for a single k
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KAccuracy {
    pub k: usize,
    pub accuracy: f64,
}

/// measures the average knn accuracy of each k in `config.k`
///
/// every fold downsamples `training`, splits the sample 80/20 and classifies
/// the held out part against the rest. k values larger than a fold's
/// training set are skipped. folds without any test records are left out of
/// the average.
#[instrument(skip_all, fields(records = training.len(), folds = config.folds))]
pub fn find_k<L, R>(
    training: &[FeatureRecord<L>],
    positive: &L,
    config: &TuningConfig,
    rng: &mut R,
) -> Result<Vec<KAccuracy>>
where
    L: PartialEq + Clone,
    R: Rng + ?Sized,
{
    let sampled = std::cmp::min(config.sample_limit, training.len());
    let pool = sampled - sampled / 5;

    let mut rtn = Vec::new();

    for k in config.k.get_range(pool) {
        let mut accuracies = Vec::with_capacity(config.folds);

        for _ in 0..config.folds {
            let fold = downsample(training, config.sample_limit, rng);
            let (examples, test_set) = divide_80_20(&fold, rng);

            let counts = knn_classify(&examples, &test_set, positive, k, config.metric)?;

            accuracies.push(counts.accuracy());
        }

        let defined: Vec<f64> = accuracies.into_iter().filter(|v| !v.is_nan()).collect();
        let accuracy = stats::mean(&defined);

        info!(k, accuracy, "average accuracy");

        rtn.push(KAccuracy { k, accuracy });
    }

    Ok(rtn)
}

/// the k with the highest average accuracy. the smallest k wins ties
pub fn best_k(results: &[KAccuracy]) -> Option<KAccuracy> {
    let mut rtn: Option<KAccuracy> = None;

    for result in results.iter().filter(|result| !result.accuracy.is_nan()) {
        match rtn {
            Some(best) if best.accuracy >= result.accuracy => {}
            _ => rtn = Some(*result),
        }
    }

    rtn
}
