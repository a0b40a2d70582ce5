//! Weighted multinomial sampling.
//!
//! Both probabilistic seeders reduce each round to the same primitive: given
//! a discrete distribution over row indices, draw one index with probability
//! equal to its mass. Keeping a single implementation here means the two
//! algorithms cannot drift apart on the numeric details (normalization,
//! round-off slack, end-of-scan behavior).
//!
//! Sampling is inverse-CDF: draw `u` uniform in `[0, 1)`, scan the running
//! cumulative sum, and return the first index whose cumulative mass reaches
//! `u`. Floating-point accumulation can leave the final cumulative sum a hair
//! under 1, in which case the scan would fall off the end for `u` near 1;
//! the last index is returned instead of erroring. Total mass marginally
//! above 1 (up to 1.0001) is tolerated for the same reason.

use crate::error::{Error, Result};
use rand::Rng;

/// Accumulated probability mass may exceed 1 by at most this much before it
/// is considered a bug rather than round-off.
const MASS_SLACK: f64 = 1.0001;

/// Draws an index from `probs`, a distribution summing to ≈ 1.
///
/// Returns [`Error::EmptyInput`] if `probs` is empty.
pub fn sample_multinomial<R: Rng + ?Sized>(probs: &[f64], rng: &mut R) -> Result<usize> {
    sample_multinomial_with_slack(probs, 0.0, rng)
}

/// Draws an index from `probs`, accepting an index once its cumulative mass
/// reaches `u - cutoff_slack`.
///
/// The slack reproduces the k-means++ cutoff tolerance; pass `0.0` for exact
/// inverse-CDF behavior.
pub fn sample_multinomial_with_slack<R: Rng + ?Sized>(
    probs: &[f64],
    cutoff_slack: f64,
    rng: &mut R,
) -> Result<usize> {
    if probs.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(scan_cumulative(probs, rng.random::<f64>(), cutoff_slack))
}

/// Normalizes `probs` in place so it sums to 1.
///
/// Fails if the total mass is zero, negative, or non-finite; a distribution
/// that cannot be normalized means every candidate carries no selection mass
/// and no meaningful draw exists.
pub(crate) fn normalize(probs: &mut [f64]) -> Result<()> {
    let sum: f64 = probs.iter().sum();
    if !(sum > 0.0) || !sum.is_finite() {
        return Err(Error::Other(format!(
            "probability mass {sum} is not normalizable"
        )));
    }
    for p in probs.iter_mut() {
        *p /= sum;
    }
    Ok(())
}

fn scan_cumulative(probs: &[f64], u: f64, cutoff_slack: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, &p) in probs.iter().enumerate() {
        cumulative += p;
        debug_assert!(
            cumulative <= MASS_SLACK,
            "sum of probabilities > 1: {cumulative}"
        );
        if cumulative >= u - cutoff_slack {
            return i;
        }
    }
    // Round-off left the total short of u; the tail index absorbs it.
    probs.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::prelude::*;

    #[test]
    fn test_empty_distribution_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample_multinomial(&[], &mut rng), Err(Error::EmptyInput));
    }

    #[test]
    fn test_point_mass_always_selected() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(sample_multinomial(&[0.0, 1.0, 0.0], &mut rng), Ok(1));
        }
    }

    #[test]
    fn test_scan_returns_first_index_reaching_u() {
        let probs = [0.25, 0.25, 0.5];
        assert_eq!(scan_cumulative(&probs, 0.0, 0.0), 0);
        assert_eq!(scan_cumulative(&probs, 0.3, 0.0), 1);
        assert_eq!(scan_cumulative(&probs, 0.99, 0.0), 2);
    }

    #[test]
    fn test_scan_slack_pulls_cutoff_earlier() {
        let probs = [0.25, 0.25, 0.5];
        // u just past the first boundary still lands on index 0 with slack.
        assert_eq!(scan_cumulative(&probs, 0.2505, 1e-3), 0);
        assert_eq!(scan_cumulative(&probs, 0.2505, 0.0), 1);
    }

    #[test]
    fn test_mass_slightly_over_one_is_tolerated() {
        let probs = [0.5, 0.50009];
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let i = sample_multinomial(&probs, &mut rng).unwrap();
            assert!(i < probs.len());
        }
    }

    #[test]
    fn test_short_mass_falls_back_to_last_index() {
        // Total mass 0.4 < u: the scan falls off the end.
        assert_eq!(scan_cumulative(&[0.2, 0.2], 0.9, 0.0), 1);
    }

    #[test]
    fn test_normalize_scales_to_unit_mass() {
        let mut probs = vec![2.0, 6.0];
        normalize(&mut probs).unwrap();
        assert_eq!(probs, vec![0.25, 0.75]);
    }

    #[test]
    fn test_normalize_rejects_zero_mass() {
        let mut probs = vec![0.0, 0.0];
        assert!(normalize(&mut probs).is_err());
    }

    #[test]
    fn test_normalize_rejects_nan_mass() {
        let mut probs = vec![f64::NAN, 1.0];
        assert!(normalize(&mut probs).is_err());
    }

    proptest! {
        #[test]
        fn scan_always_yields_valid_index(
            raw in proptest::collection::vec(0.0f64..10.0, 1..64),
            u in 0.0f64..1.0,
        ) {
            let mut probs = raw;
            if normalize(&mut probs).is_ok() {
                let i = scan_cumulative(&probs, u, 0.0);
                prop_assert!(i < probs.len());
            }
        }

        #[test]
        fn sampled_index_never_has_zero_mass_without_slack(
            raw in proptest::collection::vec(0.0f64..10.0, 2..64),
            u in 0.001f64..1.0,
        ) {
            let mut probs = raw;
            if normalize(&mut probs).is_ok() {
                let i = scan_cumulative(&probs, u, 0.0);
                // With u > 0 the first index reaching u must carry mass,
                // unless round-off pushed the scan to the tail fallback.
                let total: f64 = probs[..=i].iter().sum();
                prop_assert!(probs[i] > 0.0 || total < u);
            }
        }
    }
}
