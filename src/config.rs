use crate::distance::Metric;

/// the range of k values to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KRange {
    low: usize,
    /// exclusive
    high: usize,
    step: usize,
}

impl KRange {
    /// an inclusive range of k values, `None` when `low` is 0, `step` is 0,
    /// `low` is greater than `high` or `high` is `usize::MAX`
    pub fn new(low: usize, high: usize, step: usize) -> Option<Self> {
        if low == 0 || step == 0 || low > high {
            return None;
        }

        let high = high.checked_add(1)?;

        Some(Self { low, high, step })
    }

    /// a single k value, `None` when `k` is 0
    pub fn single(k: usize) -> Option<Self> {
        Self::new(k, k, 1)
    }

    /// the k values to evaluate against a pool of `total` records. k can never
    /// exceed the pool
    pub fn get_range(&self, total: usize) -> std::iter::StepBy<std::ops::Range<usize>> {
        let end = std::cmp::min(total.saturating_add(1), self.high);

        (self.low..end).step_by(self.step)
    }
}

impl Default for KRange {
    /// the odd values from 1 to 21
    fn default() -> Self {
        Self {
            low: 1,
            high: 22,
            step: 2,
        }
    }
}

/// settings for searching for the best k
#[derive(Debug, Clone, PartialEq)]
pub struct TuningConfig {
    pub k: KRange,
    /// the number of random folds averaged for each k
    pub folds: usize,
    /// each fold is downsampled to at most this many records
    pub sample_limit: usize,
    pub metric: Metric,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            k: KRange::default(),
            folds: 1,
            sample_limit: 5000,
            metric: Metric::Euclidean,
        }
    }
}

/// settings for repeated train/test trials of a scoring model
#[derive(Debug, Clone, PartialEq)]
pub struct TrialConfig {
    pub trials: usize,
    /// scores strictly above this are predicted positive
    pub threshold: f64,
    /// distance between thresholds of the ROC sweep
    pub sweep_step: f64,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            threshold: 0.5,
            sweep_step: 0.01,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn collect(range: KRange, total: usize) -> Vec<usize> {
        range.get_range(total).collect()
    }

    #[test]
    fn single_value() {
        let range = KRange::single(9).unwrap();

        assert_eq!(collect(range, 100), vec![9]);
        assert!(collect(range, 8).is_empty());
    }

    #[test]
    fn range_with_step() {
        let range = KRange::new(1, 21, 2).unwrap();

        assert_eq!(range, KRange::default());
        assert_eq!(
            collect(range, 100),
            vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21]
        );
    }

    #[test]
    fn range_without_step() {
        let range = KRange::new(3, 5, 1).unwrap();

        assert_eq!(collect(range, 100), vec![3, 4, 5]);
    }

    #[test]
    fn get_range_is_clamped_to_total() {
        let range = KRange::default();

        assert_eq!(collect(range, 6), vec![1, 3, 5]);
        assert_eq!(collect(range, 5), vec![1, 3, 5]);
        assert!(collect(range, 0).is_empty());
    }

    #[test]
    fn new_rejects_empty_ranges() {
        assert_eq!(KRange::new(0, 3, 1), None);
        assert_eq!(KRange::new(3, 1, 1), None);
        assert_eq!(KRange::new(1, 3, 0), None);
        assert_eq!(KRange::single(0), None);
    }

    #[test]
    fn new_rejects_unbounded_high() {
        assert_eq!(KRange::new(1, usize::MAX, 1), None);
        assert_eq!(KRange::single(usize::MAX), None);

        let range = KRange::new(1, usize::MAX - 1, 1).unwrap();

        assert_eq!(range.get_range(usize::MAX).len(), usize::MAX - 1);
    }

    #[test]
    fn defaults() {
        let tuning = TuningConfig::default();
        let trials = TrialConfig::default();

        assert_eq!(tuning.sample_limit, 5000);
        assert_eq!(tuning.metric, Metric::Euclidean);
        assert_eq!(trials.trials, 100);
        assert_eq!(trials.threshold, 0.5);
    }
}
