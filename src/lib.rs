//! evaluation of binary classifiers over small labeled datasets
//!
//! - [`search`] / [`classify`]: k nearest neighbor voting and the prevalence
//!   baseline
//! - [`stats`]: confusion counts and the statistics derived from them
//! - [`roc`]: threshold sweeps of scoring models and AUROC
//! - [`tuning`] / [`trials`]: repeated random splits aggregated into means
//!   and confidence intervals

pub mod classify;
pub mod config;
pub mod datasets;
pub mod distance;
pub mod error;
pub mod logging;
pub mod record;
pub mod regression;
pub mod roc;
pub mod search;
pub mod split;
pub mod stats;
pub mod trials;
pub mod tuning;

pub use classify::{knn_classify, majority_vote, prevalence_classify};
pub use config::{KRange, TrialConfig, TuningConfig};
pub use distance::Metric;
pub use error::{Error, Result};
pub use record::FeatureRecord;
pub use roc::{RocCurve, Scorer, apply_model, auc, build_roc, threshold_sweep};
pub use search::{Neighbors, find_k_nearest};
pub use split::divide_80_20;
pub use stats::{ConfusionCounts, DerivedStatistics, Summary};
pub use trials::{TrialReport, run_trials};
pub use tuning::find_k;
