//! Read-only view of the point set being seeded.
//!
//! Seed selection never mutates the data and never depends on how the host
//! stores it. [`PointMatrix`] is the narrow seam: `n` rows of dimensionality
//! `d`, addressable by row index. An implementation is provided for
//! [`ndarray::Array2<f64>`], which is what most hosts already hold.

use ndarray::{Array2, ArrayView1};

/// An immutable n×d numeric matrix whose rows are candidate seed points.
///
/// `Sync` is required so that rows can be read concurrently when the
/// `parallel` feature is enabled.
pub trait PointMatrix: Sync {
    /// Number of rows (data points).
    fn rows(&self) -> usize;

    /// Number of columns (dimensionality).
    fn columns(&self) -> usize;

    /// Borrow row `i` as a dense view.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    fn row(&self, i: usize) -> ArrayView1<'_, f64>;
}

impl PointMatrix for Array2<f64> {
    fn rows(&self) -> usize {
        self.nrows()
    }

    fn columns(&self) -> usize {
        self.ncols()
    }

    fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        // Inherent `ArrayBase::row` wins method resolution over the trait.
        self.row(i)
    }
}

impl<M: PointMatrix> PointMatrix for &M {
    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn columns(&self) -> usize {
        (**self).columns()
    }

    fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        (**self).row(i)
    }
}
