//! record constructors for the marathon and titanic datasets
use std::fmt;

use crate::error::{Error, Result};
use crate::record::FeatureRecord;

/// names of the features produced by [`passenger`], in order
pub const PASSENGER_FEATURES: [&str; 5] = ["C1", "C2", "C3", "age", "male gender"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("M"),
            Self::Female => f.write_str("F"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Survived,
    Perished,
}

/// a marathon finisher labeled by gender with the features `[age, time]`
pub fn runner(gender: Gender, age: f64, time: f64) -> FeatureRecord<Gender> {
    FeatureRecord::new([age, time], gender)
}

/// a titanic passenger labeled by whether they survived
///
/// the cabin class is one hot encoded into the first three features, refer to
/// [`PASSENGER_FEATURES`]
pub fn passenger(
    cabin_class: u8,
    age: f64,
    gender: Gender,
    survived: bool,
) -> Result<FeatureRecord<Outcome>> {
    if !(1..=3).contains(&cabin_class) {
        return Err(Error::InvalidCabinClass(cabin_class));
    }

    let mut features = [0.0, 0.0, 0.0, age, 0.0];
    features[usize::from(cabin_class - 1)] = 1.0;

    if gender == Gender::Male {
        features[4] = 1.0;
    }

    let outcome = if survived {
        Outcome::Survived
    } else {
        Outcome::Perished
    };

    Ok(FeatureRecord::new(features, outcome))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn runner_features() {
        let record = runner(Gender::Female, 34.0, 241.5);

        assert_eq!(record.features(), &[34.0, 241.5]);
        assert_eq!(record.label(), &Gender::Female);
        assert_eq!(record.label().to_string(), "F");
    }

    #[test]
    fn passenger_one_hot_class() {
        let record = passenger(2, 29.0, Gender::Male, false).unwrap();

        assert_eq!(record.features(), &[0.0, 1.0, 0.0, 29.0, 1.0]);
        assert_eq!(record.label(), &Outcome::Perished);
        assert_eq!(record.dimension(), PASSENGER_FEATURES.len());

        let record = passenger(3, 0.92, Gender::Female, true).unwrap();

        assert_eq!(record.features(), &[0.0, 0.0, 1.0, 0.92, 0.0]);
        assert_eq!(record.label(), &Outcome::Survived);
    }

    #[test]
    fn passenger_rejects_unknown_class() {
        assert_eq!(
            passenger(0, 30.0, Gender::Male, true),
            Err(Error::InvalidCabinClass(0))
        );
        assert_eq!(
            passenger(4, 30.0, Gender::Male, true),
            Err(Error::InvalidCabinClass(4))
        );
    }
}
