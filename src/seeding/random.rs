//! Uniform random seed selection.

use super::traits::{all_rows, validate_request};
use super::{make_rng, SeedSelector};
use crate::error::Result;
use crate::matrix::PointMatrix;
use ndarray::Array1;
use rand::seq::index;

/// Picks `k` distinct rows uniformly at random.
///
/// The baseline every careful seeding strategy is measured against. When
/// `k >= n` every row is returned and the remaining `k - n` slots are filled
/// with zero vectors, so callers that size buffers by `k` always get exactly
/// `k` entries from this selector.
#[derive(Debug, Clone, Default)]
pub struct RandomSeed {
    seed: Option<u64>,
}

impl RandomSeed {
    /// Create a new uniform selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl SeedSelector for RandomSeed {
    fn choose_seeds<M: PointMatrix>(&self, k: usize, points: &M) -> Result<Vec<Array1<f64>>> {
        validate_request(k, points)?;
        let n = points.rows();

        if k >= n {
            let mut seeds = all_rows(points);
            seeds.resize(k, Array1::zeros(points.columns()));
            return Ok(seeds);
        }

        let mut rng = make_rng(self.seed);
        let mut picked = index::sample(&mut rng, n, k).into_vec();
        picked.sort_unstable();

        Ok(picked.into_iter().map(|i| points.row(i).to_owned()).collect())
    }
}
