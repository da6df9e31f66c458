use crate::pipeline::FeatureRow;

/// Fraction of rows withheld for evaluation by default.
pub const DEFAULT_HOLDOUT_FRACTION: f64 = 0.2;

/// Default seed for the holdout shuffle.
pub const DEFAULT_SPLIT_SEED: u64 = 42;

/// Deterministic train/holdout partition of feature rows.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldoutSplit {
    pub train: Vec<FeatureRow>,
    pub holdout: Vec<FeatureRow>,
}

/// Partition `rows` with a seeded shuffle.
///
/// The holdout takes `floor(len * fraction)` rows, so small inputs can
/// legitimately produce an empty holdout; the caller decides whether that
/// is an error. Both subsets are restored to their original chronological
/// order. Identical rows, fraction, and seed always produce the identical
/// partition.
pub fn split_holdout(rows: &[FeatureRow], fraction: f64, seed: u64) -> HoldoutSplit {
    let mut indices: Vec<usize> = (0..rows.len()).collect();
    let mut rng = fastrand::Rng::with_seed(seed);
    rng.shuffle(&mut indices);

    let holdout_len = ((rows.len() as f64 * fraction).floor() as usize).min(rows.len());
    let mut holdout_indices = indices[..holdout_len].to_vec();
    let mut train_indices = indices[holdout_len..].to_vec();
    holdout_indices.sort_unstable();
    train_indices.sort_unstable();

    HoldoutSplit {
        train: train_indices.iter().map(|&i| rows[i]).collect(),
        holdout: holdout_indices.iter().map(|&i| rows[i]).collect(),
    }
}
