//! Fixed-seed train/test partition

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::model::ModelError;

/// Two disjoint row-index subsets of the sample table.
///
/// Built by shuffling `0..n` with a seeded RNG and cutting off the first
/// `ceil(n * test_fraction)` indices as the test subset. The same seed and
/// sample count always reproduce the identical partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTestSplit {
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
    pub seed: u64,
}

impl TrainTestSplit {
    pub fn n_train(&self) -> usize {
        self.train_indices.len()
    }

    pub fn n_test(&self) -> usize {
        self.test_indices.len()
    }

    /// Gather the training rows and labels.
    pub fn train_set(
        &self,
        features: &[Vec<f64>],
        labels: &[usize],
    ) -> (Vec<Vec<f64>>, Vec<usize>) {
        gather(&self.train_indices, features, labels)
    }

    /// Gather the held-out rows and labels.
    pub fn test_set(
        &self,
        features: &[Vec<f64>],
        labels: &[usize],
    ) -> (Vec<Vec<f64>>, Vec<usize>) {
        gather(&self.test_indices, features, labels)
    }
}

fn gather(
    indices: &[usize],
    features: &[Vec<f64>],
    labels: &[usize],
) -> (Vec<Vec<f64>>, Vec<usize>) {
    let rows = indices.iter().map(|&i| features[i].clone()).collect();
    let y = indices.iter().map(|&i| labels[i]).collect();
    (rows, y)
}

/// Partition `n_samples` rows into train and test index sets.
///
/// # Errors
///
/// Returns [`ModelError::EmptyDataset`] for zero samples and
/// [`ModelError::InvalidTestFraction`] when `test_fraction` is outside
/// the open interval (0, 1).
pub fn train_test_split(
    n_samples: usize,
    test_fraction: f64,
    seed: u64,
) -> Result<TrainTestSplit, ModelError> {
    if n_samples == 0 {
        return Err(ModelError::EmptyDataset);
    }
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(ModelError::InvalidTestFraction {
            fraction: test_fraction,
        });
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = ((n_samples as f64 * test_fraction).ceil() as usize)
        .clamp(1, n_samples.saturating_sub(1).max(1));

    let test_indices = indices[..n_test].to_vec();
    let train_indices = indices[n_test..].to_vec();

    Ok(TrainTestSplit {
        train_indices,
        test_indices,
        seed,
    })
}
