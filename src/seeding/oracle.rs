//! Seed selection from an externally supplied assignment.
//!
//! When a reference partition exists (gold labels, a previous clustering, a
//! hand-built bucketing), the best possible starting centers for it are the
//! per-cluster means. [`OracleSeed`] computes exactly that, making it the
//! topline baseline the probabilistic selectors are compared against.
//!
//! The assignment is a 0-indexed cluster id per input row, in row order,
//! either given directly or parsed from the plain-text stream format: one
//! non-negative integer per line. Blank lines are skipped; anything else
//! that fails to parse is rejected with the offending line number.
//!
//! A cluster with no assigned rows has no defined mean. Rather than invent a
//! fallback vector, the call fails with [`Error::EmptyCluster`]; callers can
//! re-bucket or lower k.

use super::traits::validate_request;
use super::SeedSelector;
use crate::error::{Error, Result};
use crate::matrix::PointMatrix;
use ndarray::{Array1, Array2};
use std::io::BufRead;

/// Derives centroids as the per-cluster means of an external assignment.
#[derive(Debug, Clone)]
pub struct OracleSeed {
    assignments: Vec<usize>,
}

impl OracleSeed {
    /// Wraps an assignment: one cluster id per row, in row order.
    pub fn new(assignments: Vec<usize>) -> Self {
        Self { assignments }
    }

    /// Parses the line-oriented assignment format: one non-negative integer
    /// per line, blank lines skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut assignments = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::MalformedAssignment {
                line: idx + 1,
                message: e.to_string(),
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let id = trimmed.parse::<usize>().map_err(|e| Error::MalformedAssignment {
                line: idx + 1,
                message: e.to_string(),
            })?;
            assignments.push(id);
        }
        Ok(Self::new(assignments))
    }

    /// The wrapped assignment.
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }
}

impl SeedSelector for OracleSeed {
    fn choose_seeds<M: PointMatrix>(&self, k: usize, points: &M) -> Result<Vec<Array1<f64>>> {
        validate_request(k, points)?;
        let n = points.rows();
        let d = points.columns();
        if self.assignments.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: self.assignments.len(),
            });
        }

        let mut sums = Array2::<f64>::zeros((k, d));
        let mut counts = vec![0usize; k];
        for (i, &id) in self.assignments.iter().enumerate() {
            if id >= k {
                return Err(Error::InvalidAssignment { id, n_clusters: k });
            }
            let row = points.row(i);
            for j in 0..d {
                sums[[id, j]] += row[j];
            }
            counts[id] += 1;
        }

        let mut centroids = Vec::with_capacity(k);
        for (j, &count) in counts.iter().enumerate() {
            if count == 0 {
                return Err(Error::EmptyCluster { cluster: j });
            }
            centroids.push(sums.row(j).mapv(|v| v / count as f64));
        }
        Ok(centroids)
    }
}
