//! Input validation for SymNMF configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for pipeline inputs and
//! configuration parameters: point sets, cluster counts, supplied initial
//! factor matrices, and the optimization constants.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Explicit rejection**: Ragged or non-finite point sets are rejected with
//!   typed errors before any matrix is built.
//! * **Shape contract**: A caller-supplied H0 must be exactly N x k; its
//!   numerical quality beyond finiteness is the caller's responsibility.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair invalid inputs.
//! * This module does not perform the factorization itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SymNmfError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for SymNMF inputs and parameters.
///
/// Provides static methods that return `Result<(), SymNmfError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a point set: non-empty, rectangular, and finite.
    pub fn validate_points<T: Float>(points: &[Vec<T>]) -> Result<(), SymNmfError> {
        // Check 1: Non-empty set with a non-empty first point
        if points.is_empty() || points[0].is_empty() {
            return Err(SymNmfError::EmptyInput);
        }

        // Check 2: Rectangular shape
        let dim = points[0].len();
        for (i, point) in points.iter().enumerate() {
            if point.len() != dim {
                return Err(SymNmfError::RaggedInput {
                    row: i,
                    expected: dim,
                    got: point.len(),
                });
            }
        }

        // Check 3: All coordinates finite
        for (i, point) in points.iter().enumerate() {
            for (j, &coord) in point.iter().enumerate() {
                if !coord.is_finite() {
                    return Err(SymNmfError::InvalidNumericValue(format!(
                        "points[{}][{}]={}",
                        i,
                        j,
                        coord.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validate the requested cluster count against the point count.
    pub fn validate_cluster_count(clusters: usize, points: usize) -> Result<(), SymNmfError> {
        if clusters == 0 || clusters > points {
            return Err(SymNmfError::InvalidClusterCount { clusters, points });
        }
        Ok(())
    }

    /// Validate a caller-supplied initial factor matrix.
    ///
    /// Checks shape and finiteness only; whether the start is numerically
    /// sensible is deliberately left to the caller.
    pub fn validate_initial_factors<T: Float>(
        factors: &Matrix<T>,
        points: usize,
        clusters: usize,
    ) -> Result<(), SymNmfError> {
        if factors.rows() != points || factors.cols() != clusters {
            return Err(SymNmfError::InvalidFactorShape {
                rows: factors.rows(),
                cols: factors.cols(),
                expected_rows: points,
                expected_cols: clusters,
            });
        }
        if !factors.is_finite() {
            return Err(SymNmfError::InvalidNumericValue(format!(
                "initial factors contain a non-finite entry ({}x{})",
                factors.rows(),
                factors.cols()
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the convergence tolerance.
    pub fn validate_tolerance<T: Float>(tolerance: T) -> Result<(), SymNmfError> {
        if !tolerance.is_finite() || tolerance <= T::zero() {
            return Err(SymNmfError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the damping factor.
    pub fn validate_damping<T: Float>(damping: T) -> Result<(), SymNmfError> {
        if !damping.is_finite() || damping < T::zero() || damping > T::one() {
            return Err(SymNmfError::InvalidDamping(
                damping.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the iteration cap.
    pub fn validate_iterations(iterations: usize) -> Result<(), SymNmfError> {
        if iterations == 0 {
            return Err(SymNmfError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SymNmfError> {
        if let Some(parameter) = duplicate_param {
            return Err(SymNmfError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
