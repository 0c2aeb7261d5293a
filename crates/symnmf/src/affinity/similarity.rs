//! Similarity matrix construction from a point set.
//!
//! ## Purpose
//!
//! This module builds the pairwise similarity matrix A that every later stage
//! of the pipeline is derived from. Entries use a Gaussian kernel over squared
//! Euclidean distance with a fixed bandwidth of one.
//!
//! ## Key concepts
//!
//! * **Kernel**: `A[i][j] = exp(-||p_i - p_j||^2 / 2)` for `i != j`.
//! * **Zero diagonal**: `A[i][i] = 0` always. Self-similarity is defined as
//!   zero, not `exp(0) = 1`, so a point contributes nothing to its own degree.
//!
//! ## Invariants
//!
//! * A is symmetric with an exactly-zero diagonal.
//! * Off-diagonal entries lie in (0, 1].
//! * Construction is deterministic: identical input yields bitwise-identical
//!   output.
//!
//! ## Non-goals
//!
//! * No bandwidth selection; the kernel scale is fixed by the pipeline.
//! * No sparsification or thresholding of small entries.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::distance::squared_euclidean;
use crate::primitives::matrix::Matrix;

/// Build the N x N similarity matrix for a validated point set.
///
/// The kernel is symmetric in its arguments, so each off-diagonal pair is
/// computed once and mirrored.
pub fn similarity_matrix<T: Float>(points: &[Vec<T>]) -> Matrix<T> {
    let n = points.len();
    let half = T::from(0.5).unwrap();

    let mut matrix = Matrix::zeros(n, n);
    for i in 0..n {
        for j in (i + 1)..n {
            let dist = squared_euclidean(&points[i], &points[j]);
            let value = (-dist * half).exp();
            matrix[(i, j)] = value;
            matrix[(j, i)] = value;
        }
    }
    matrix
}
