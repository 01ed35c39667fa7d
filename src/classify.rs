//! binary classifiers evaluated against a labeled test set
//!
//! every classifier here predicts whether a test record carries the given
//! positive label and tallies the outcome into a [`ConfusionCounts`].
//!
//! [`knn_classify`] votes among the nearest training records found by
//! [`find_k_nearest`].
//!
//! [`prevalence_classify`] is the baseline that guesses positive with the
//! same probability as the positive label appears in the training set.
use rand::Rng;
use tracing::debug;

use crate::distance::Metric;
use crate::error::{Error, Result};
use crate::record::FeatureRecord;
use crate::search::find_k_nearest;
use crate::stats::ConfusionCounts;

/// predicts positive when more than half of the labels match `positive`
///
/// the threshold is `k / 2` with integer division so for an even number of
/// neighbors a tie votes negative.
pub fn majority_vote<'a, L, I>(labels: I, positive: &L) -> bool
where
    L: PartialEq + 'a,
    I: IntoIterator<Item = &'a L>,
{
    let mut k = 0;
    let mut matches = 0;

    for label in labels {
        k += 1;

        if label == positive {
            matches += 1;
        }
    }

    matches > k / 2
}

/// runs the knn search and vote for every record in `test_set` against
/// `training`
pub fn knn_classify<L>(
    training: &[FeatureRecord<L>],
    test_set: &[FeatureRecord<L>],
    positive: &L,
    k: usize,
    metric: Metric,
) -> Result<ConfusionCounts>
where
    L: PartialEq,
{
    let mut counts = ConfusionCounts::default();

    for record in test_set {
        let nearest = find_k_nearest(record, training, k, metric)?;
        let predicted = majority_vote(nearest.labels(), positive);

        counts.record(predicted, record.label() == positive);
    }

    debug!(
        k,
        training = training.len(),
        test = test_set.len(),
        true_positive = counts.true_positive,
        false_positive = counts.false_positive,
        true_negative = counts.true_negative,
        false_negative = counts.false_negative,
        "knn evaluation complete"
    );

    Ok(counts)
}

/// guesses the label of each test record from how common the positive label
/// is in `training`
pub fn prevalence_classify<L, R>(
    training: &[FeatureRecord<L>],
    test_set: &[FeatureRecord<L>],
    positive: &L,
    rng: &mut R,
) -> Result<ConfusionCounts>
where
    L: PartialEq,
    R: Rng + ?Sized,
{
    if training.is_empty() {
        return Err(Error::EmptyTrainingSet);
    }

    let with_label = training
        .iter()
        .filter(|record| record.label() == positive)
        .count();
    let prob_label = with_label as f64 / training.len() as f64;

    let mut counts = ConfusionCounts::default();

    for record in test_set {
        let predicted = rng.random::<f64>() < prob_label;

        counts.record(predicted, record.label() == positive);
    }

    debug!(
        prob_label,
        test = test_set.len(),
        "prevalence evaluation complete"
    );

    Ok(counts)
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    // (x, y) datapoints on a small graph
    const RECORDS: [([f64; 2], &str); 8] = [
        ([1.0, 1.0], "a"),
        ([2.0, 2.0], "b"),
        ([1.5, 2.5], "a"),
        ([1.0, 3.0], "b"),
        ([2.0, 1.0], "a"),
        ([1.0, 2.0], "b"),
        ([3.0, 1.0], "a"),
        ([2.5, 1.5], "b"),
    ];

    fn training() -> Vec<FeatureRecord<&'static str>> {
        RECORDS
            .iter()
            .map(|(data, label)| FeatureRecord::new(*data, *label))
            .collect()
    }

    #[test]
    fn majority_vote_tie_at_threshold_is_negative() {
        let labels = ["M", "M", "M", "M", "F", "F", "F", "F", "F"];

        // 4 votes is not more than 9 / 2
        assert!(!majority_vote(&labels, &"M"));
        assert!(majority_vote(&labels, &"F"));
    }

    #[test]
    fn majority_vote_even_k_tie_is_negative() {
        assert!(!majority_vote(&["M", "M", "F", "F"], &"M"));
        assert!(majority_vote(&["M", "M", "M", "F"], &"M"));
    }

    #[test]
    fn knn_classify_two_of_three_votes_positive() {
        let training = vec![
            FeatureRecord::new([0.0], "M"),
            FeatureRecord::new([1.0], "M"),
            FeatureRecord::new([1.5], "F"),
            FeatureRecord::new([10.0], "F"),
            FeatureRecord::new([20.0], "F"),
        ];
        let test_set = vec![FeatureRecord::new([0.5], "M")];

        let counts = knn_classify(&training, &test_set, &"M", 3, Metric::Euclidean).unwrap();

        assert_eq!(counts.true_positive, 1);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn knn_classify_tallies_each_outcome_once() {
        let training = training();
        let test_set = vec![
            // nearest are a, a, b
            FeatureRecord::new([1.5, 1.0], "a"),
            // nearest are a, b, a
            FeatureRecord::new([1.5, 1.5], "b"),
            // nearest are a, b, b
            FeatureRecord::new([1.2, 2.6], "b"),
            // nearest are b, b, a after ties settle
            FeatureRecord::new([1.0, 2.5], "a"),
        ];

        let counts = knn_classify(&training, &test_set, &"a", 3, Metric::Euclidean).unwrap();

        assert_eq!(
            counts,
            ConfusionCounts {
                true_positive: 1,
                false_positive: 1,
                true_negative: 1,
                false_negative: 1,
            }
        );
        assert_eq!(counts.total(), test_set.len() as u64);
    }

    #[test]
    fn knn_classify_propagates_pool_errors() {
        let training = training();
        let test_set = vec![FeatureRecord::new([1.5, 1.0], "a")];

        let result = knn_classify(&training, &test_set, &"a", 9, Metric::Euclidean);

        assert_eq!(result, Err(Error::InsufficientPoolSize { k: 9, pool: 8 }));
    }

    #[test]
    fn prevalence_classify_follows_training_prevalence() {
        let mut rng = StdRng::seed_from_u64(24);
        let all_positive = vec![FeatureRecord::new([0.0], "a"); 4];
        let all_negative = vec![FeatureRecord::new([0.0], "b"); 4];
        let test_set = training();

        let counts = prevalence_classify(&all_positive, &test_set, &"a", &mut rng).unwrap();

        assert_eq!(counts.true_positive + counts.false_positive, 8);

        let counts = prevalence_classify(&all_negative, &test_set, &"a", &mut rng).unwrap();

        assert_eq!(counts.true_negative + counts.false_negative, 8);
    }

    #[test]
    fn prevalence_classify_counts_every_test_record() {
        let mut rng = StdRng::seed_from_u64(7);
        let training = training();

        let counts = prevalence_classify(&training, &training, &"b", &mut rng).unwrap();

        assert_eq!(counts.total(), training.len() as u64);
    }

    #[test]
    fn prevalence_classify_rejects_empty_training() {
        let mut rng = StdRng::seed_from_u64(7);
        let training: Vec<FeatureRecord<&str>> = Vec::new();

        let result = prevalence_classify(&training, &training, &"b", &mut rng);

        assert_eq!(result, Err(Error::EmptyTrainingSet));
    }
}
