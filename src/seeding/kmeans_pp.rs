//! k-means++ seed selection.
//!
//! # The Algorithm (Arthur & Vassilvitskii, 2007)
//!
//! 1. Pick the first center uniformly at random among all rows.
//! 2. Pick each next center with probability proportional to D(x)², the
//!    squared distance from x to its nearest already-chosen center.
//! 3. Repeat until k centers are chosen.
//!
//! Spreading centers by squared distance makes the expected clustering cost
//! O(log k)-competitive with the optimum, and in practice rescues Lloyd's
//! algorithm from the worst local minima that uniform seeding falls into.
//!
//! Already-selected rows sit at distance 0 from themselves, so they carry no
//! selection mass in later rounds; no explicit exclusion set is needed.
//!
//! The cumulative-probability cutoff accepts an index once its cumulative
//! mass reaches `u - cutoff_slack`. The default slack of 1e-3 is inherited
//! behavior, not load-bearing; it is tunable via
//! [`with_cutoff_slack`](KMeansPlusPlus::with_cutoff_slack).

use super::traits::{all_rows, validate_request};
use super::{first_unselected_at_or_after, make_rng, NearestCenterTracker, SeedSelector};
use crate::error::Result;
use crate::matrix::PointMatrix;
use crate::seeding::sampler::{normalize, sample_multinomial_with_slack};
use ndarray::{Array1, ArrayView1};
use rand::prelude::*;

const DEFAULT_CUTOFF_SLACK: f64 = 1e-3;

/// k-means++ seed selector: favors rows far from already-chosen centers.
#[derive(Debug, Clone)]
pub struct KMeansPlusPlus {
    /// Random seed.
    seed: Option<u64>,
    /// Tolerance on the cumulative-probability cutoff.
    cutoff_slack: f64,
}

impl KMeansPlusPlus {
    /// Create a new k-means++ selector.
    pub fn new() -> Self {
        Self {
            seed: None,
            cutoff_slack: DEFAULT_CUTOFF_SLACK,
        }
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the cumulative-probability cutoff tolerance.
    pub fn with_cutoff_slack(mut self, slack: f64) -> Self {
        self.cutoff_slack = slack;
        self
    }
}

impl Default for KMeansPlusPlus {
    fn default() -> Self {
        Self::new()
    }
}

fn euclidean(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Selection mass for the next round: dist² normalized to sum 1.
///
/// Returns `None` when every remaining distance is zero (all unselected rows
/// coincide with a chosen center), in which case no distance-weighted draw
/// exists and the caller falls back to a uniform pick.
fn squared_distance_mass(distances: &[f64]) -> Option<Vec<f64>> {
    let mut probs: Vec<f64> = distances.iter().map(|d| d * d).collect();
    normalize(&mut probs).ok()?;
    Some(probs)
}

impl SeedSelector for KMeansPlusPlus {
    fn choose_seeds<M: PointMatrix>(&self, k: usize, points: &M) -> Result<Vec<Array1<f64>>> {
        validate_request(k, points)?;
        let n = points.rows();
        if n <= k {
            return Ok(all_rows(points));
        }

        let mut rng = make_rng(self.seed);
        let mut selected = vec![false; n];
        let mut picked = Vec::with_capacity(k);

        let first = rng.random_range(0..n);
        selected[first] = true;
        picked.push(first);

        let c0 = points.row(first).to_owned();
        let mut nearest = NearestCenterTracker::from_fn(n, |i| euclidean(points.row(i), c0.view()));

        for _ in 1..k {
            let next = match squared_distance_mass(nearest.values()) {
                Some(probs) => {
                    let drawn = sample_multinomial_with_slack(&probs, self.cutoff_slack, &mut rng)?;
                    first_unselected_at_or_after(drawn, &selected)
                }
                // Remaining rows all coincide with chosen centers; any
                // unselected row is as good as any other.
                None => {
                    let unselected: Vec<usize> = (0..n).filter(|&i| !selected[i]).collect();
                    unselected[rng.random_range(0..unselected.len())]
                }
            };

            selected[next] = true;
            picked.push(next);

            let c = points.row(next).to_owned();
            nearest.tighten_with(|i| euclidean(points.row(i), c.view()));
        }

        Ok(picked.iter().map(|&i| points.row(i).to_owned()).collect())
    }
}
