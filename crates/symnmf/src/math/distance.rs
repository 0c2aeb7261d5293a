//! Distance functions for affinity construction.
//!
//! ## Purpose
//!
//! This module provides the squared Euclidean distance used by the similarity
//! kernel, and its square root for evaluation metrics that need true
//! distances.
//!
//! ## Invariants
//!
//! * Both slices must have the same length (debug-asserted; the ingestion
//!   layer rejects ragged point sets before any distance is computed).
//! * Distances are non-negative and symmetric in their arguments.

// External dependencies
use num_traits::Float;

/// Squared Euclidean distance: sum of squared coordinate differences.
#[inline]
pub fn squared_euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| {
            let diff = x - y;
            acc + diff * diff
        })
}

/// Euclidean distance between two points.
#[inline]
pub fn euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    squared_euclidean(a, b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn squared_distance_of_identical_points_is_zero() {
        let p = [1.0, 2.0, 3.0];
        assert_eq!(squared_euclidean(&p, &p), 0.0);
    }

    #[test]
    fn squared_distance_sums_coordinate_differences() {
        let a = [0.0, 0.0];
        let b = [3.0, 4.0];
        assert_relative_eq!(squared_euclidean(&a, &b), 25.0);
        assert_relative_eq!(euclidean(&a, &b), 5.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = [1.5, -2.0, 0.25];
        let b = [-0.5, 1.0, 4.0];
        assert_eq!(squared_euclidean(&a, &b), squared_euclidean(&b, &a));
    }
}
