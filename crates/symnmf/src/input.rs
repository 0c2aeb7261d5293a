//! Input abstractions for the clustering pipeline.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for point-set inputs, allowing
//! the public operations to accept multiple data formats (slices of rows,
//! vectors, ndarray) through a single interface, plus a parser for the
//! comma-delimited text format.
//!
//! ## Design notes
//!
//! * **Owned hand-off**: Conversion materializes an owned dense copy of the
//!   point set; the caller's buffers are read-only to every pipeline stage and
//!   never aliased by internal results.
//! * **Fail-fast validation**: Ragged rows are rejected at the boundary with a
//!   typed error rather than reaching the numerical core.
//! * **Typed parse errors**: A malformed text field surfaces as
//!   [`SymNmfError::InvalidNumericValue`] naming the offending line and field.
//!
//! ## Key concepts
//!
//! * **PointsInput Trait**: The core abstraction that converts a host
//!   representation into the pipeline's N x d row layout.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.
//! * This module does not handle reshaping or dimensionality reduction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
#[cfg(feature = "ndarray")]
use ndarray::{ArrayBase, Data, Ix2};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SymNmfError;

// ============================================================================
// PointsInput Trait
// ============================================================================

/// Trait for types that can be used as a point set.
pub trait PointsInput<T: Float> {
    /// Convert the input into owned N x d rows, rejecting ragged shapes.
    fn to_points(&self) -> Result<Vec<Vec<T>>, SymNmfError>;
}

impl<T: Float> PointsInput<T> for [Vec<T>] {
    fn to_points(&self) -> Result<Vec<Vec<T>>, SymNmfError> {
        if let Some(first) = self.first() {
            for (i, row) in self.iter().enumerate() {
                if row.len() != first.len() {
                    return Err(SymNmfError::RaggedInput {
                        row: i,
                        expected: first.len(),
                        got: row.len(),
                    });
                }
            }
        }
        Ok(self.to_vec())
    }
}

impl<T: Float> PointsInput<T> for Vec<Vec<T>> {
    fn to_points(&self) -> Result<Vec<Vec<T>>, SymNmfError> {
        self.as_slice().to_points()
    }
}

#[cfg(feature = "ndarray")]
impl<T: Float, S> PointsInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn to_points(&self) -> Result<Vec<Vec<T>>, SymNmfError> {
        Ok(self
            .rows()
            .into_iter()
            .map(|row| row.iter().copied().collect())
            .collect())
    }
}

// ============================================================================
// Text Parsing
// ============================================================================

/// Parse a comma-delimited point set: one point per line, blank lines
/// ignored.
///
/// Every line must carry the same number of fields as the first; unparsable
/// fields are typed errors, never process termination.
#[cfg(feature = "std")]
pub fn parse_points<T>(text: &str) -> Result<Vec<Vec<T>>, SymNmfError>
where
    T: Float + core::str::FromStr,
{
    let mut points: Vec<Vec<T>> = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut point = Vec::new();
        for (field_no, field) in trimmed.split(',').enumerate() {
            let value: T = field.trim().parse().map_err(|_| {
                SymNmfError::InvalidNumericValue(format!(
                    "line {}, field {}: {:?}",
                    line_no + 1,
                    field_no + 1,
                    field.trim()
                ))
            })?;
            point.push(value);
        }

        if let Some(first) = points.first() {
            if point.len() != first.len() {
                return Err(SymNmfError::RaggedInput {
                    row: points.len(),
                    expected: first.len(),
                    got: point.len(),
                });
            }
        }
        points.push(point);
    }

    Ok(points)
}
