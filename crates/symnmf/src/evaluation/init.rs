//! Initial factor matrix generation.
//!
//! ## Purpose
//!
//! This module produces the random non-negative starting point H0 for the
//! multiplicative-update loop. Entries are drawn uniformly from
//! `[0, 2 * sqrt(mean(W) / k))`, which bounds the initial iterate by the
//! average affinity of the data.
//!
//! ## Design notes
//!
//! * **Internal PRNG**: Uses a minimal LCG so the core stays `no_std`-clean
//!   and dependency-light; the same seed always produces the same H0.
//! * **Caller-supplied alternative**: The engine accepts any non-negative H0;
//!   this generator is the default used by the high-level `fit` path.
//!
//! ## Invariants
//!
//! * Every generated entry is non-negative and finite.
//! * A zero affinity matrix yields an all-zero H0 (the upper bound collapses).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::Matrix;

/// Default seed for reproducible initialization when none is configured.
pub const DEFAULT_SEED: u64 = 1234;

// ============================================================================
// Internal PRNG
// ============================================================================

/// Minimal PRNG for no-std sampling.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Uniform sample in [0, 1).
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }
}

// ============================================================================
// Initial Factors
// ============================================================================

/// Generate a random N x k initial factor matrix for the given affinity
/// target.
///
/// Entries are uniform in `[0, 2 * sqrt(mean(affinity) / clusters))`. The same
/// seed yields the same matrix across runs.
pub fn initial_factors<T: Float>(affinity: &Matrix<T>, clusters: usize, seed: u64) -> Matrix<T> {
    let mean = affinity.mean();
    let upper = T::from(2.0).unwrap() * (mean / T::from(clusters).unwrap()).sqrt();

    let mut rng = SimpleRng::new(seed);
    let mut matrix = Matrix::zeros(affinity.rows(), clusters);
    for i in 0..affinity.rows() {
        for j in 0..clusters {
            matrix[(i, j)] = upper * T::from(rng.next_unit()).unwrap();
        }
    }
    matrix
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn affinity_fixture() -> Matrix<f64> {
        Matrix::from_rows(&[vec![0.0, 0.5, 0.3], vec![0.5, 0.0, 0.8], vec![0.3, 0.8, 0.0]])
            .unwrap()
    }

    #[test]
    fn entries_stay_below_the_affinity_bound() {
        let w = affinity_fixture();
        let upper = 2.0 * (w.mean() / 2.0).sqrt();

        let h = initial_factors(&w, 2, 7);
        assert_eq!(h.rows(), 3);
        assert_eq!(h.cols(), 2);
        assert!(h.iter().all(|&v| (0.0..upper).contains(&v)));
    }

    #[test]
    fn same_seed_reproduces_the_same_matrix() {
        let w = affinity_fixture();
        assert_eq!(initial_factors(&w, 2, 42), initial_factors(&w, 2, 42));
    }

    #[test]
    fn different_seeds_differ() {
        let w = affinity_fixture();
        assert_ne!(initial_factors(&w, 2, 1), initial_factors(&w, 2, 2));
    }

    #[test]
    fn zero_affinity_collapses_to_zero_factors() {
        let w = Matrix::<f64>::zeros(3, 3);
        let h = initial_factors(&w, 2, 5);
        assert!(h.iter().all(|&v| v == 0.0));
    }
}
