//! Two-phase probabilistic seed selection under an arbitrary similarity.
//!
//! # The Algorithm (Ostrovsky, Rabani, Schulman & Swamy, 2006)
//!
//! ORSS seeding picks k centers in two phases:
//!
//! **Phase A** chooses the first two centers jointly. With `OPT₁` the cost of
//! the optimal 1-means solution (every point charged to the center of mass):
//!
//! 1. Pick center 1 with probability ∝ `(OPT₁ + n·D(x)²) / (2n·OPT₁)`,
//!    where D(x) is the distance from x to the center of mass.
//! 2. Pick center 2 with probability ∝ `D(x, c₁)² / (OPT₁ + n·D(c₁, com)²)`.
//!
//! **Phase B** picks each remaining center with probability proportional to
//! the squared distance to its nearest already-chosen center, like k-means++
//! but starting from the pair chosen above.
//!
//! Under the paper's separation condition this yields a constant-factor
//! approximation in expectation, against k-means++'s O(log k).
//!
//! # Generalizing the distance
//!
//! This implementation replaces the squared Euclidean distance with the
//! **inverse** of any non-negative [`Similarity`]: dissimilar pairs (small
//! similarity) carry large surrogate distance and are favored as new
//! centers. With similarity `1/(‖a−b‖² + ε)` the original formulation is
//! recovered; with cosine similarity, text-style data can be seeded without
//! embedding it in a metric space first.
//!
//! Rows can also carry positive integer weights representing sample
//! multiplicity; all probability masses scale accordingly.
//!
//! # References
//!
//! - Ostrovsky, Rabani, Schulman & Swamy (2006). "The effectiveness of
//!   Lloyd-type methods for the k-means problem"
//! - Shindler's streaming k-means reference implementation, which this
//!   selection schedule follows

use super::traits::{all_rows, validate_request};
use super::{first_unselected_at_or_after, make_rng, NearestCenterTracker, SeedSelector};
use crate::error::{Error, Result};
use crate::matrix::PointMatrix;
use crate::seeding::sampler::{normalize, sample_multinomial};
use crate::similarity::{invert_sim, Similarity};
use ndarray::Array1;

/// Two-phase ORSS seed selector, generic over the similarity used to
/// compare points.
#[derive(Debug, Clone)]
pub struct GeneralizedOrss<S> {
    /// The similarity used to compare points.
    sim: S,
    /// Random seed.
    seed: Option<u64>,
}

/// Phase-A aggregates: the weighted center of mass, each point's surrogate
/// distance to it, and the optimal 1-means cost they imply.
struct MassStats {
    center_of_mass: Array1<f64>,
    inv_sims: Vec<f64>,
    opt1: f64,
    total_weight: f64,
}

impl<S: Similarity> GeneralizedOrss<S> {
    /// Create a new selector comparing points with `sim`.
    pub fn new(sim: S) -> Self {
        Self { sim, seed: None }
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Selects `k` rows weighted by `weights` (one positive integer per
    /// row, representing sample multiplicity).
    ///
    /// The unweighted [`choose_seeds`](SeedSelector::choose_seeds) is
    /// equivalent to a weight of 1 on every row.
    pub fn choose_weighted_seeds<M: PointMatrix>(
        &self,
        k: usize,
        points: &M,
        weights: &[usize],
    ) -> Result<Vec<Array1<f64>>> {
        validate_request(k, points)?;
        let n = points.rows();
        if weights.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: weights.len(),
            });
        }
        if weights.contains(&0) {
            return Err(Error::InvalidParameter {
                name: "weights",
                message: "weights must be positive",
            });
        }
        if n <= k {
            return Ok(all_rows(points));
        }

        let mut rng = make_rng(self.seed);
        let stats = self.mass_stats(points, weights);

        let mut probs = first_center_mass(&stats)?;
        let c1 = sample_multinomial(&probs, &mut rng)?;
        if k == 1 {
            return Ok(vec![points.row(c1).to_owned()]);
        }

        self.second_center_mass(points, weights, &stats, c1, &mut probs)?;
        let c2 = {
            let drawn = sample_multinomial(&probs, &mut rng)?;
            // The end-of-scan fallback can land on the zero-mass first pick.
            if drawn == c1 {
                (drawn + 1) % n
            } else {
                drawn
            }
        };

        let first = points.row(c1).to_owned();
        let second = points.row(c2).to_owned();
        let mut nearest = NearestCenterTracker::from_fn(n, |i| {
            let s1 = invert_sim(self.sim.sim(points.row(i), first.view()));
            let s2 = invert_sim(self.sim.sim(points.row(i), second.view()));
            s1.min(s2)
        });
        nearest.zero(c1);
        nearest.zero(c2);

        let mut selected = vec![false; n];
        selected[c1] = true;
        selected[c2] = true;
        let mut picked = vec![c1, c2];

        for _ in 2..k {
            let probs = selection_mass(nearest.values(), weights, &selected)?;
            let drawn = sample_multinomial(&probs, &mut rng)?;
            let next = first_unselected_at_or_after(drawn, &selected);
            selected[next] = true;
            picked.push(next);

            let center = points.row(next).to_owned();
            nearest.tighten_with(|i| invert_sim(self.sim.sim(points.row(i), center.view())));
        }

        Ok(picked.iter().map(|&i| points.row(i).to_owned()).collect())
    }

    fn mass_stats<M: PointMatrix>(&self, points: &M, weights: &[usize]) -> MassStats {
        let n = points.rows();
        let total_weight: f64 = weights.iter().map(|&w| w as f64).sum();

        let mut center_of_mass = Array1::<f64>::zeros(points.columns());
        for i in 0..n {
            center_of_mass.scaled_add(weights[i] as f64, &points.row(i));
        }
        center_of_mass /= total_weight;

        let inv_sims: Vec<f64> = (0..n)
            .map(|i| invert_sim(self.sim.sim(center_of_mass.view(), points.row(i))))
            .collect();
        let opt1 = inv_sims
            .iter()
            .zip(weights)
            .map(|(&s, &w)| s * w as f64)
            .sum();

        MassStats {
            center_of_mass,
            inv_sims,
            opt1,
            total_weight,
        }
    }

    /// Fills `probs` with the mass for the second center: each remaining
    /// row's weighted surrogate distance to the first center, against the
    /// cost the first center leaves unexplained.
    fn second_center_mass<M: PointMatrix>(
        &self,
        points: &M,
        weights: &[usize],
        stats: &MassStats,
        c1: usize,
        probs: &mut [f64],
    ) -> Result<()> {
        let first = points.row(c1);
        let from_com = invert_sim(self.sim.sim(first, stats.center_of_mass.view()));
        let denom = stats.opt1 + stats.total_weight * from_com;

        for (i, p) in probs.iter_mut().enumerate() {
            *p = if i == c1 {
                0.0
            } else {
                invert_sim(self.sim.sim(points.row(i), first)) * weights[i] as f64 / denom
            };
        }
        normalize(probs)
    }
}

impl<S: Similarity> SeedSelector for GeneralizedOrss<S> {
    fn choose_seeds<M: PointMatrix>(&self, k: usize, points: &M) -> Result<Vec<Array1<f64>>> {
        let weights = vec![1usize; points.rows()];
        self.choose_weighted_seeds(k, points, &weights)
    }
}

/// Mass for the first center: `(OPT₁ + W·d_i) / (2W·OPT₁)` with `d_i` the
/// surrogate distance of row i to the center of mass and `W` the total
/// weight, normalized to a distribution.
fn first_center_mass(stats: &MassStats) -> Result<Vec<f64>> {
    let mut probs: Vec<f64> = stats
        .inv_sims
        .iter()
        .map(|&d| (stats.opt1 + stats.total_weight * d) / (2.0 * stats.total_weight * stats.opt1))
        .collect();
    normalize(&mut probs)?;
    Ok(probs)
}

/// Phase-B mass: weighted running-best distance for unselected rows, zero
/// for selected ones.
fn selection_mass(best: &[f64], weights: &[usize], selected: &[bool]) -> Result<Vec<f64>> {
    let mut probs: Vec<f64> = (0..best.len())
        .map(|i| {
            if selected[i] {
                0.0
            } else {
                best[i] * weights[i] as f64
            }
        })
        .collect();
    normalize(&mut probs)?;
    Ok(probs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::{Cosine, InverseSquaredEuclidean};
    use ndarray::{array, Array2};
    use std::collections::HashSet;

    fn quad() -> Array2<f64> {
        array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [3.0, 3.0]]
    }

    fn selector() -> GeneralizedOrss<InverseSquaredEuclidean> {
        GeneralizedOrss::new(InverseSquaredEuclidean { epsilon: 1e-9 })
    }

    #[test]
    fn test_returns_k_distinct_rows() {
        let data = array![
            [0.0, 0.0],
            [0.2, 0.1],
            [5.0, 5.0],
            [5.1, 5.2],
            [10.0, 0.0],
            [10.2, 0.1],
            [0.0, 10.0],
            [0.1, 10.3],
        ];
        for seed in 0..20 {
            let seeds = selector()
                .with_seed(seed)
                .choose_seeds(4, &data)
                .unwrap();
            assert_eq!(seeds.len(), 4);
            let rows: HashSet<Vec<u64>> = seeds
                .iter()
                .map(|s| s.iter().map(|v| v.to_bits()).collect())
                .collect();
            assert_eq!(rows.len(), 4, "seed {seed} produced duplicate rows");
        }
    }

    #[test]
    fn test_k_equal_one_returns_single_row() {
        let data = quad();
        let seeds = selector().with_seed(1).choose_seeds(1, &data).unwrap();
        assert_eq!(seeds.len(), 1);
        assert!(data.rows().into_iter().any(|r| r == seeds[0].view()));
    }

    #[test]
    fn test_n_at_most_k_returns_all_rows() {
        let data = array![[1.0, 2.0], [3.0, 4.0]];
        let seeds = selector().choose_seeds(4, &data).unwrap();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].to_vec(), vec![1.0, 2.0]);
        assert_eq!(seeds[1].to_vec(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let data = quad();
        let a = selector().with_seed(13).choose_seeds(3, &data).unwrap();
        let b = selector().with_seed(13).choose_seeds(3, &data).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_first_center_mass_matches_euclidean_orss() {
        // Against the closed-form squared-Euclidean computation: center of
        // mass (1, 1); squared distances [2, 1, 1, 8]; OPT₁ = 12;
        // p_i = (12 + 4·d²) / 96.
        let data = quad();
        let weights = vec![1usize; 4];
        let stats = selector().mass_stats(&data, &weights);
        let probs = first_center_mass(&stats).unwrap();

        let expected = [20.0 / 96.0, 16.0 / 96.0, 16.0 / 96.0, 44.0 / 96.0];
        for (p, e) in probs.iter().zip(expected) {
            assert!((p - e).abs() < 1e-6, "got {p}, expected {e}");
        }
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_weights_shift_center_of_mass() {
        let data = array![[0.0], [4.0]];
        let stats = selector().mass_stats(&data, &[3, 1]);
        assert!((stats.center_of_mass[0] - 1.0).abs() < 1e-12);
        assert_eq!(stats.total_weight, 4.0);
    }

    #[test]
    fn test_second_center_mass_zeroes_first_pick() {
        let data = quad();
        let weights = vec![1usize; 4];
        let sel = selector();
        let stats = sel.mass_stats(&data, &weights);
        let mut probs = first_center_mass(&stats).unwrap();
        sel.second_center_mass(&data, &weights, &stats, 3, &mut probs)
            .unwrap();

        assert_eq!(probs[3], 0.0);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_selection_mass_skips_selected_rows() {
        let probs = selection_mass(&[2.0, 0.0, 1.0, 1.0], &[1, 1, 2, 1], &[false, true, false, false])
            .unwrap();
        assert_eq!(probs[1], 0.0);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-4);
        // weighted mass: [2, 0, 2, 1] / 5
        assert!((probs[0] - 0.4).abs() < 1e-12);
        assert!((probs[2] - 0.4).abs() < 1e-12);
        assert!((probs[3] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_running_best_tightens_monotonically() {
        // The exact update schedule the selector runs: seed the tracker with
        // the nearer of two centers, then add centers one at a time. Every
        // entry must be non-increasing round over round.
        let data = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [0.0, 1.0],
            [4.0, 4.0],
            [5.0, 4.0],
            [4.0, 5.0],
            [9.0, 0.0],
            [0.0, 9.0],
        ];
        let sim = InverseSquaredEuclidean { epsilon: 1e-9 };
        let surrogate =
            |i: usize, c: usize| invert_sim(sim.sim(data.row(i), data.row(c)));

        let mut nearest =
            NearestCenterTracker::from_fn(8, |i| surrogate(i, 0).min(surrogate(i, 3)));
        nearest.zero(0);
        nearest.zero(3);

        for c in [6usize, 7, 1] {
            let before = nearest.values().to_vec();
            nearest.tighten_with(|i| surrogate(i, c));
            for i in 0..8 {
                assert!(nearest.get(i) <= before[i], "entry {i} grew adding {c}");
            }
        }
    }

    #[test]
    fn test_cosine_similarity_selects_distinct_directions() {
        // Three bundles of directions with strictly positive pairwise
        // similarity (a pair with similarity exactly 0 would carry zero
        // surrogate distance under the inversion convention and never be
        // favored). Phase A + B should usually spread across all bundles.
        let data = array![
            [1.0, 0.02, 0.02],
            [0.999, 0.021, 0.02],
            [0.02, 1.0, 0.02],
            [0.021, 0.999, 0.02],
            [0.02, 0.02, 1.0],
            [0.02, 0.021, 0.999],
        ];
        let trials = 50;
        let mut spread = 0;
        for seed in 0..trials {
            let seeds = GeneralizedOrss::new(Cosine)
                .with_seed(seed)
                .choose_seeds(3, &data)
                .unwrap();
            let axes: HashSet<usize> = seeds
                .iter()
                .map(|s| {
                    s.iter()
                        .enumerate()
                        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
                        .unwrap()
                        .0
                })
                .collect();
            if axes.len() == 3 {
                spread += 1;
            }
        }
        // Cross-bundle surrogate distance dominates same-bundle by a factor
        // of ~25 per round; uniform picking would spread only ~40% of runs.
        assert!(spread >= 40, "only {spread}/{trials} runs spread");
    }

    #[test]
    fn test_weight_validation() {
        let data = quad();
        assert!(matches!(
            selector().choose_weighted_seeds(2, &data, &[1, 1]),
            Err(Error::DimensionMismatch {
                expected: 4,
                found: 2
            })
        ));
        assert!(matches!(
            selector().choose_weighted_seeds(2, &data, &[1, 0, 1, 1]),
            Err(Error::InvalidParameter {
                name: "weights",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_arguments() {
        let data = quad();
        assert!(matches!(
            selector().choose_seeds(0, &data),
            Err(Error::InvalidParameter { .. })
        ));
        let empty = Array2::<f64>::zeros((0, 2));
        assert_eq!(selector().choose_seeds(2, &empty), Err(Error::EmptyInput));
    }
}
