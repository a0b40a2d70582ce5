//! Nearest-center distance bookkeeping.
//!
//! Every round of k-means++ and of the two-phase seeder needs, for each data
//! point, the smallest surrogate distance from that point to any center
//! chosen so far. The two algorithms historically re-implemented this array
//! independently; [`NearestCenterTracker`] is the single shared version.
//!
//! After construction the array is only ever min-updated, so each entry is
//! non-increasing over the life of a seeding run. Selected centers sit at
//! distance zero from themselves and therefore drop out of future selection
//! mass without an explicit exclusion step.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Per-point running minimum distance to any selected center.
#[derive(Debug, Clone)]
pub struct NearestCenterTracker {
    best: Vec<f64>,
}

impl NearestCenterTracker {
    /// Wraps an initial distance array (distances to the first center or
    /// centers).
    pub fn new(initial: Vec<f64>) -> Self {
        Self { best: initial }
    }

    /// Builds the tracker by evaluating `distance` for every point index.
    pub fn from_fn<F>(n: usize, distance: F) -> Self
    where
        F: Fn(usize) -> f64 + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        let best = (0..n).into_par_iter().map(&distance).collect();

        #[cfg(not(feature = "parallel"))]
        let best = (0..n).map(&distance).collect();

        Self { best }
    }

    /// Number of tracked points.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// True when no points are tracked.
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Current best distance for point `i`.
    pub fn get(&self, i: usize) -> f64 {
        self.best[i]
    }

    /// The full running-best array.
    pub fn values(&self) -> &[f64] {
        &self.best
    }

    /// Forces entry `i` to zero (a selected center is at distance zero from
    /// itself).
    pub fn zero(&mut self, i: usize) {
        self.best[i] = 0.0;
    }

    /// Min-updates every entry against `candidate(i)`, the distance from
    /// point `i` to a newly selected center.
    pub fn tighten_with<F>(&mut self, candidate: F)
    where
        F: Fn(usize) -> f64 + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        self.best.par_iter_mut().enumerate().for_each(|(i, b)| {
            let c = candidate(i);
            if c < *b {
                *b = c;
            }
        });

        #[cfg(not(feature = "parallel"))]
        for (i, b) in self.best.iter_mut().enumerate() {
            let c = candidate(i);
            if c < *b {
                *b = c;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tighten_keeps_minimum() {
        let mut t = NearestCenterTracker::new(vec![5.0, 1.0, 3.0]);
        t.tighten_with(|i| [2.0, 4.0, 3.0][i]);
        assert_eq!(t.values(), &[2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_zero_pins_entry() {
        let mut t = NearestCenterTracker::new(vec![5.0, 1.0]);
        t.zero(0);
        assert_eq!(t.get(0), 0.0);
        t.tighten_with(|_| 10.0);
        assert_eq!(t.get(0), 0.0);
    }

    #[test]
    fn test_from_fn_evaluates_every_index() {
        let t = NearestCenterTracker::from_fn(4, |i| i as f64 * 2.0);
        assert_eq!(t.values(), &[0.0, 2.0, 4.0, 6.0]);
        assert_eq!(t.len(), 4);
        assert!(!t.is_empty());
    }

    proptest! {
        #[test]
        fn entries_never_increase(
            initial in proptest::collection::vec(0.0f64..100.0, 1..32),
            rounds in proptest::collection::vec(
                proptest::collection::vec(0.0f64..100.0, 32), 0..8),
        ) {
            let n = initial.len();
            let mut t = NearestCenterTracker::new(initial);
            for round in rounds {
                let before = t.values().to_vec();
                t.tighten_with(|i| round[i]);
                for i in 0..n {
                    prop_assert!(t.get(i) <= before[i]);
                }
            }
        }
    }
}
