//! Symmetric degree normalization of the similarity matrix.
//!
//! ## Purpose
//!
//! This module produces the normalized affinity matrix W, the target of the
//! factorization: the similarity matrix scaled symmetrically by the inverse
//! square roots of the row degrees.
//!
//! ## Design notes
//!
//! * **Recomputation**: Like the degree stage, this stage rebuilds the
//!   similarity matrix from the point set and releases it before returning.
//! * **Degree vector**: Degrees are materialized as a length-N vector here,
//!   not as a diagonal matrix.
//! * **Zero-degree guard**: An entry whose row or column has degree exactly
//!   zero is set to exactly zero. This is a division-by-zero guard, not a
//!   mathematical limit.
//!
//! ## Invariants
//!
//! * W is symmetric.
//! * `W[i][j] == 0` whenever `degree[i] == 0` or `degree[j] == 0`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::affinity::degree::row_degrees;
use crate::affinity::similarity::similarity_matrix;
use crate::primitives::matrix::Matrix;

/// Build the N x N normalized affinity matrix for a validated point set.
///
/// `W[i][j] = A[i][j] / (sqrt(degree[i]) * sqrt(degree[j]))`, with the
/// zero-degree guard described in the module documentation.
pub fn normalized_matrix<T: Float>(points: &[Vec<T>]) -> Matrix<T> {
    let affinity = similarity_matrix(points);
    let degrees = row_degrees(&affinity);
    let scales: Vec<T> = degrees.iter().map(|&d| d.sqrt()).collect();

    let n = points.len();
    let mut matrix = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            if degrees[i] == T::zero() || degrees[j] == T::zero() {
                continue;
            }
            matrix[(i, j)] = affinity[(i, j)] / (scales[i] * scales[j]);
        }
    }
    matrix
}
