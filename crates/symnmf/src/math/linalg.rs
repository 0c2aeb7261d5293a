//! Dense matrix primitives for the factorization engine.
//!
//! ## Purpose
//!
//! This module provides the three matrix operations the multiplicative-update
//! loop is built from: the dense product, the transpose, and the squared
//! Frobenius distance used as the convergence metric.
//!
//! ## Design notes
//!
//! * **Allocation**: Each primitive allocates and returns a fresh result;
//!   inputs are never modified.
//! * **Shape contract**: Shape agreement is the caller's responsibility and is
//!   only debug-asserted, matching the engine's internal use where shapes are
//!   known by construction.
//! * **Accumulation**: Product entries start at zero and accumulate, with the
//!   k-loop innermost over contiguous rows of both operands.
//!
//! ## Non-goals
//!
//! * No blocking, SIMD, or parallel execution; the pipeline is single-threaded
//!   and synchronous by design.

// Internal dependencies
use crate::primitives::matrix::Matrix;

// External dependencies
use num_traits::Float;

// ============================================================================
// Matrix Primitives
// ============================================================================

/// Dense matrix product `p * q`.
///
/// Result shape is `rows(p)` x `cols(q)`; requires `cols(p) == rows(q)`.
pub fn multiply<T: Float>(p: &Matrix<T>, q: &Matrix<T>) -> Matrix<T> {
    debug_assert_eq!(p.cols(), q.rows());

    let mut result = Matrix::zeros(p.rows(), q.cols());
    for i in 0..p.rows() {
        let p_row = p.row(i);
        for (k, &p_ik) in p_row.iter().enumerate() {
            let q_row = q.row(k);
            for j in 0..q.cols() {
                result[(i, j)] = result[(i, j)] + p_ik * q_row[j];
            }
        }
    }
    result
}

/// Transpose of `p`: a `cols(p)` x `rows(p)` matrix with entries swapped.
pub fn transpose<T: Float>(p: &Matrix<T>) -> Matrix<T> {
    let mut result = Matrix::zeros(p.cols(), p.rows());
    for i in 0..p.rows() {
        for j in 0..p.cols() {
            result[(j, i)] = p[(i, j)];
        }
    }
    result
}

/// Squared Frobenius distance: sum over all entries of `(p[i][j] - q[i][j])^2`.
///
/// Both matrices must have the same shape. This is the scalar convergence
/// metric of the optimization loop, not a norm of a single matrix.
pub fn frobenius_distance_sq<T: Float>(p: &Matrix<T>, q: &Matrix<T>) -> T {
    debug_assert_eq!(p.rows(), q.rows());
    debug_assert_eq!(p.cols(), q.cols());

    p.iter()
        .zip(q.iter())
        .fold(T::zero(), |acc, (&a, &b)| {
            let diff = a - b;
            acc + diff * diff
        })
}

// ============================================================================
// Tests
// ============================================================================
