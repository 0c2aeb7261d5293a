//! Error types for SymNMF operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while building affinity
//! matrices and running the factorization, including input validation,
//! parameter constraints, and non-convergence of the optimization loop.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected shapes).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty point sets, ragged rows, non-finite values.
//! 2. **Parameter validation**: Invalid cluster count, tolerance, damping, or iteration cap.
//! 3. **Non-convergence**: The optimization loop exhausted its iteration budget.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for SymNMF operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SymNmfError {
    /// The point set is empty; at least one point is required.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// A point row does not match the dimension of the first row.
    RaggedInput {
        /// Index of the offending row.
        row: usize,
        /// Dimension of the first row.
        expected: usize,
        /// Dimension of the offending row.
        got: usize,
    },

    /// Input data contains NaN, infinite, or unparsable values.
    InvalidNumericValue(String),

    /// The requested cluster count is outside [1, number of points].
    InvalidClusterCount {
        /// Requested number of clusters.
        clusters: usize,
        /// Number of points in the data set.
        points: usize,
    },

    /// A supplied initial factor matrix does not have the required shape.
    InvalidFactorShape {
        /// Rows of the supplied matrix.
        rows: usize,
        /// Columns of the supplied matrix.
        cols: usize,
        /// Required row count (number of points).
        expected_rows: usize,
        /// Required column count (number of clusters).
        expected_cols: usize,
    },

    /// Convergence tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Damping factor must lie in [0, 1].
    InvalidDamping(f64),

    /// The optimization loop requires at least 1 iteration.
    InvalidIterations(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The optimization loop exhausted its iteration budget without converging.
    DidNotConverge {
        /// Number of iterations performed before giving up.
        iterations: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SymNmfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input point set is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::RaggedInput { row, expected, got } => {
                write!(
                    f,
                    "Ragged input: row {row} has dimension {got}, expected {expected}"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidClusterCount { clusters, points } => {
                write!(
                    f,
                    "Invalid cluster count: {clusters} (must be between 1 and {points})"
                )
            }
            Self::InvalidFactorShape {
                rows,
                cols,
                expected_rows,
                expected_cols,
            } => {
                write!(
                    f,
                    "Invalid factor shape: {rows}x{cols} (must be {expected_rows}x{expected_cols})"
                )
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::InvalidDamping(beta) => {
                write!(f, "Invalid damping factor: {beta} (must be in [0, 1])")
            }
            Self::InvalidIterations(iter) => {
                write!(f, "Invalid iteration cap: {iter} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::DidNotConverge { iterations } => {
                write!(
                    f,
                    "Factorization did not converge within {iterations} iterations"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SymNmfError {}
