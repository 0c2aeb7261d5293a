//! Diagonal degree matrix construction.
//!
//! ## Purpose
//!
//! This module reduces the similarity matrix to its diagonal degree matrix D,
//! where `D[i][i]` is the total affinity of point `i` and every off-diagonal
//! entry is exactly zero.
//!
//! ## Design notes
//!
//! * **Recomputation**: The stage rebuilds the similarity matrix from the
//!   point set rather than taking one as input; each pipeline stage owns its
//!   intermediates outright and releases them before returning.
//! * **Zero initialization**: The full matrix starts zeroed; only the diagonal
//!   is written.
//!
//! ## Invariants
//!
//! * `D[i][i]` equals the sum of row `i` of the similarity matrix.
//! * `D[i][j] == 0` exactly, for all `i != j`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::affinity::similarity::similarity_matrix;
use crate::primitives::matrix::Matrix;

/// Per-row sums of a square affinity matrix, materialized as a vector.
pub fn row_degrees<T: Float>(affinity: &Matrix<T>) -> Vec<T> {
    (0..affinity.rows())
        .map(|i| {
            affinity
                .row(i)
                .iter()
                .fold(T::zero(), |acc, &value| acc + value)
        })
        .collect()
}

/// Build the N x N diagonal degree matrix for a validated point set.
pub fn degree_matrix<T: Float>(points: &[Vec<T>]) -> Matrix<T> {
    let affinity = similarity_matrix(points);
    let degrees = row_degrees(&affinity);
    drop(affinity);

    let n = points.len();
    let mut matrix = Matrix::zeros(n, n);
    for (i, &degree) in degrees.iter().enumerate() {
        matrix[(i, i)] = degree;
    }
    matrix
}
