//! random partitioning of examples into training and test sets
use rand::Rng;
use rand::seq::index;

use crate::error::{Error, Result};

/// moves a random fifth of `examples` into the test set and leaves the rest
/// for training. both sets keep the order of `examples`
pub fn divide_80_20<T, R>(examples: &[T], rng: &mut R) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    R: Rng + ?Sized,
{
    split_by_count(examples, examples.len() / 5, rng)
}

/// splits `examples` so that `test_fraction` of them (rounded down) end up in
/// the test set
pub fn split_dataset<T, R>(
    examples: &[T],
    test_fraction: f64,
    rng: &mut R,
) -> Result<(Vec<T>, Vec<T>)>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if !(0.0..=1.0).contains(&test_fraction) {
        return Err(Error::InvalidFraction(test_fraction));
    }

    let amount = (examples.len() as f64 * test_fraction).floor() as usize;

    Ok(split_by_count(examples, amount, rng))
}

fn split_by_count<T, R>(examples: &[T], test_count: usize, rng: &mut R) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut in_test = vec![false; examples.len()];

    for sampled in index::sample(rng, examples.len(), test_count) {
        in_test[sampled] = true;
    }

    let mut training = Vec::with_capacity(examples.len() - test_count);
    let mut test = Vec::with_capacity(test_count);

    for (example, is_test) in examples.iter().zip(in_test) {
        if is_test {
            test.push(example.clone());
        } else {
            training.push(example.clone());
        }
    }

    (training, test)
}

/// picks `amount` examples without replacement, or all of them when there are
/// fewer than `amount`
pub fn downsample<T, R>(examples: &[T], amount: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let amount = std::cmp::min(amount, examples.len());

    index::sample(rng, examples.len(), amount)
        .into_iter()
        .map(|sampled| examples[sampled].clone())
        .collect()
}
