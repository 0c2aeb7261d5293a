//! Hard cluster assignment from a factor matrix.
//!
//! ## Purpose
//!
//! This module turns the soft membership rows of H into hard labels: each
//! point is assigned to the column holding its row maximum.
//!
//! ## Invariants
//!
//! * One label per row of H, each in `[0, cols)`.
//! * Ties resolve to the lowest column index.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::Matrix;

/// Per-row argmax over the columns of a factor matrix.
pub fn hard_labels<T: Float>(factors: &Matrix<T>) -> Vec<usize> {
    (0..factors.rows())
        .map(|i| {
            let row = factors.row(i);
            let mut best = 0;
            for (j, &value) in row.iter().enumerate() {
                if value > row[best] {
                    best = j;
                }
            }
            best
        })
        .collect()
}
