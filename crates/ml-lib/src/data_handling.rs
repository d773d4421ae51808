//! Helpers for preparing datasets before fitting.
//!
//! `train_test_split` works on any pair of parallel sequences, so it serves
//! both the single-feature linear models (`&[f64]`) and the row-based
//! logistic model (`&[Vec<f64>]`).
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{ensure_same_len, MlError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit<X, Y> {
    pub x_train: Vec<X>,
    pub y_train: Vec<Y>,
    pub x_test: Vec<X>,
    pub y_test: Vec<Y>,
}

/// Split parallel sequences into a training head and a test tail.
///
/// The training part holds `floor(len * train_fraction)` samples. Without a
/// seed the original order is kept; with `Some(seed)` the samples are
/// shuffled first, reproducibly for a given seed.
///
/// # Errors
///
/// * `InvalidArgument` if `train_fraction` is not strictly between 0 and 1
///   or the input is empty.
/// * `LengthMismatch` if `x` and `y` differ in length.
pub fn train_test_split<X: Clone, Y: Clone>(
    x: &[X],
    y: &[Y],
    train_fraction: f64,
    shuffle_seed: Option<u64>,
) -> Result<TrainTestSplit<X, Y>> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(MlError::InvalidArgument(format!(
            "train_fraction must be in (0, 1), got {}",
            train_fraction
        )));
    }
    if x.is_empty() {
        return Err(MlError::empty("dataset"));
    }
    ensure_same_len(x.len(), y.len())?;

    let mut indices: Vec<usize> = (0..x.len()).collect();
    if let Some(seed) = shuffle_seed {
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);
    }

    let train_size = (x.len() as f64 * train_fraction) as usize;
    let (train_idx, test_idx) = indices.split_at(train_size);

    log::debug!(
        "Split {} samples into {} training and {} test samples",
        x.len(),
        train_idx.len(),
        test_idx.len()
    );

    Ok(TrainTestSplit {
        x_train: train_idx.iter().map(|&i| x[i].clone()).collect(),
        y_train: train_idx.iter().map(|&i| y[i].clone()).collect(),
        x_test: test_idx.iter().map(|&i| x[i].clone()).collect(),
        y_test: test_idx.iter().map(|&i| y[i].clone()).collect(),
    })
}
