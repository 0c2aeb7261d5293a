//! Clustering quality diagnostics.
//!
//! ## Purpose
//!
//! This module computes quality metrics for a finished clustering. The
//! primary metric is the mean silhouette coefficient, which compares each
//! point's cohesion (mean distance to its own cluster) against its separation
//! (mean distance to the nearest other cluster).
//!
//! ## Key concepts
//!
//! * **Silhouette of a point**: `s = (b - a) / max(a, b)`, where `a` is the
//!   mean distance to other members of the point's cluster and `b` is the
//!   smallest mean distance to any other cluster.
//! * **Singleton convention**: A point alone in its cluster contributes 0.
//!
//! ## Invariants
//!
//! * The score lies in [-1, 1] when defined.
//! * The score is undefined (`None`) unless `2 <= clusters <= points - 1`.
//!
//! ## Non-goals
//!
//! * This module does not choose the number of clusters.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::distance::euclidean;

// ============================================================================
// Diagnostics
// ============================================================================

/// Quality metrics for a finished clustering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Mean silhouette coefficient over all points.
    pub silhouette: T,
}

/// Mean silhouette coefficient for a labeled point set.
///
/// Returns `None` when the score is undefined: fewer than two clusters, or
/// as many clusters as points.
pub fn silhouette_score<T: Float>(points: &[Vec<T>], labels: &[usize]) -> Option<T> {
    let n = points.len();
    if n != labels.len() || n < 2 {
        return None;
    }

    let clusters = labels.iter().max().map_or(0, |&m| m + 1);
    let mut sizes = vec![0usize; clusters];
    for &label in labels {
        sizes[label] += 1;
    }

    // The score needs at least two occupied clusters and fewer occupied
    // clusters than points, so occupancy is checked rather than the label range.
    let occupied = sizes.iter().filter(|&&size| size > 0).count();
    if occupied < 2 || occupied >= n {
        return None;
    }

    let mut total = T::zero();
    let mut mean_dist = vec![T::zero(); clusters];
    for i in 0..n {
        let own = labels[i];
        if sizes[own] == 1 {
            // Singleton cluster: silhouette is defined as 0 for this point.
            continue;
        }

        for value in mean_dist.iter_mut() {
            *value = T::zero();
        }
        for j in 0..n {
            if i != j {
                mean_dist[labels[j]] =
                    mean_dist[labels[j]] + euclidean(&points[i], &points[j]);
            }
        }

        let cohesion = mean_dist[own] / T::from(sizes[own] - 1).unwrap();
        let mut separation = T::infinity();
        for (c, &sum) in mean_dist.iter().enumerate() {
            if c != own && sizes[c] > 0 {
                let candidate = sum / T::from(sizes[c]).unwrap();
                if candidate < separation {
                    separation = candidate;
                }
            }
        }

        let denom = cohesion.max(separation);
        if denom > T::zero() {
            total = total + (separation - cohesion) / denom;
        }
    }

    Some(total / T::from(n).unwrap())
}

// ============================================================================
// Tests
// ============================================================================
