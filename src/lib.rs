//! # scatter
//!
//! Probabilistic seed selection for partition-based clustering.
//!
//! Lloyd-type clustering algorithms are only as good as their starting
//! centers. This crate selects `k` initial centers ("seeds") from an n×d
//! point matrix, from a uniform baseline up to two-phase ORSS seeding
//! generalized to arbitrary non-negative similarity functions.
//!
//! ## Selectors
//!
//! - [`RandomSeed`]: uniform k-subset of rows (baseline).
//! - [`KMeansPlusPlus`]: squared-distance-weighted sampling
//!   (Arthur & Vassilvitskii 2007).
//! - [`GeneralizedOrss`]: two-phase seeding with approximation guarantees
//!   (Ostrovsky et al. 2006), polymorphic over a [`Similarity`] and
//!   supporting per-row integer weights.
//! - [`OracleSeed`]: per-cluster means of an externally supplied
//!   assignment (topline baseline).
//!
//! All selectors implement [`SeedSelector`], hold no mutable state, and
//! draw randomness from a per-call generator seeded via `with_seed`, so
//! calls are deterministic under a fixed seed and safe to issue
//! concurrently on one instance.
//!
//! ## Example
//!
//! ```rust
//! use ndarray::array;
//! use scatter::{KMeansPlusPlus, SeedSelector};
//!
//! let data = array![
//!     [0.0, 0.0],
//!     [0.1, 0.1],
//!     [10.0, 10.0],
//!     [10.1, 10.1],
//! ];
//!
//! let seeds = KMeansPlusPlus::new()
//!     .with_seed(42)
//!     .choose_seeds(2, &data)
//!     .unwrap();
//! assert_eq!(seeds.len(), 2);
//! ```
//!
//! The optional `parallel` feature parallelizes the per-round distance
//! updates with rayon; draw order (and therefore seeded determinism) is
//! unaffected.

/// Error types used across `scatter`.
pub mod error;
pub mod matrix;
pub mod seeding;
pub mod similarity;

pub use error::{Error, Result};
pub use matrix::PointMatrix;
pub use seeding::{
    sample_multinomial, sample_multinomial_with_slack, GeneralizedOrss, KMeansPlusPlus,
    NearestCenterTracker, OracleSeed, RandomSeed, SeedSelector,
};
pub use similarity::{invert_sim, Cosine, InverseSquaredEuclidean, Similarity};
