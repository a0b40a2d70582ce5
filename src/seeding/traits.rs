//! Seed selection trait.

use crate::error::{Error, Result};
use crate::matrix::PointMatrix;
use ndarray::Array1;

/// Selects `k` initial cluster representatives from a point matrix.
///
/// Implementations are pure functions of their configuration, the input, and
/// the (per-call) random source: they hold no mutable state, so concurrent
/// calls on one instance are independent, and a fixed seed reproduces the
/// same output.
///
/// # Contract
///
/// - `k >= 1`, else [`Error::InvalidParameter`]; an empty matrix is
///   [`Error::EmptyInput`].
/// - When `n > k`: exactly `k` vectors are returned, and for row-selecting
///   implementations they correspond to `k` distinct input rows.
/// - When `n <= k`: all `n` rows are returned in row order. [`RandomSeed`]
///   additionally pads the remaining `k - n` slots with zero vectors; the
///   other implementations return exactly `n` vectors.
/// - A failed call returns an error, never a short or padded result.
///
/// [`RandomSeed`]: crate::seeding::RandomSeed
pub trait SeedSelector {
    /// Chooses `k` seed vectors from the rows of `points`.
    fn choose_seeds<M: PointMatrix>(&self, k: usize, points: &M) -> Result<Vec<Array1<f64>>>;
}

/// Shared argument validation for every selector.
pub(crate) fn validate_request<M: PointMatrix>(k: usize, points: &M) -> Result<()> {
    if k < 1 {
        return Err(Error::InvalidParameter {
            name: "k",
            message: "at least one seed must be requested",
        });
    }
    if points.rows() == 0 {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

/// Materializes every row, in row order, for the `n <= k` shortcut.
pub(crate) fn all_rows<M: PointMatrix>(points: &M) -> Vec<Array1<f64>> {
    (0..points.rows()).map(|i| points.row(i).to_owned()).collect()
}
