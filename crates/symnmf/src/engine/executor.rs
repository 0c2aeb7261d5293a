//! Multiplicative-update execution engine.
//!
//! ## Purpose
//!
//! This module runs the iterative optimization that factors the normalized
//! affinity matrix W into a non-negative N x k matrix H with `H * H^T ≈ W`.
//! It owns the iteration loop, the damped multiplicative update rule, and the
//! convergence test.
//!
//! ## Design notes
//!
//! * **Damped update**: Each entry is rescaled by
//!   `1 - beta + beta * numerator / denominator`, which preserves
//!   non-negativity from a non-negative start.
//! * **Product ordering**: The denominator is computed as `(H * H^T) * H`,
//!   through the N x N intermediate. The `(H^T * H)` ordering would produce a
//!   k x k intermediate and a different result; the N x N ordering is the
//!   defined behavior.
//! * **Ownership**: Every per-iteration intermediate is dropped before the
//!   next iteration starts; the converged iterate is the only matrix that
//!   leaves the loop.
//!
//! ## Invariants
//!
//! * The loop runs at most `max_iterations` times; it can never hang.
//! * A zero denominator entry leaves the corresponding entry of H unchanged.
//! * Inputs W and H0 are never modified.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * This module does not generate H0 (handled by `evaluation::init`).
//! * This module does not extract labels or diagnostics from the result.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::{frobenius_distance_sq, multiply, transpose};
use crate::primitives::errors::SymNmfError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Defaults
// ============================================================================

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 300;

/// Default convergence threshold on the squared Frobenius distance between
/// successive iterates.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Default damping factor of the multiplicative update.
pub const DEFAULT_DAMPING: f64 = 0.5;

// ============================================================================
// Convergence Policy
// ============================================================================

/// Behavior when the iteration cap is reached without convergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvergencePolicy {
    /// Report [`SymNmfError::DidNotConverge`]; no factor matrix is returned.
    #[default]
    Strict,

    /// Return the last iterate, flagged with `converged = false`.
    BestEffort,
}

// ============================================================================
// Executor
// ============================================================================

/// Output from a factorization run.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorizationOutput<T> {
    /// The final factor matrix H (N x k).
    pub factors: Matrix<T>,

    /// Number of update iterations performed.
    pub iterations: usize,

    /// Whether the convergence threshold was met.
    pub converged: bool,

    /// Squared Frobenius distance between the last two iterates.
    pub residual: T,
}

/// Executor for the damped multiplicative-update loop.
#[derive(Debug, Clone)]
pub struct FactorizationExecutor<T> {
    /// Iteration cap.
    pub max_iterations: usize,

    /// Convergence threshold (squared Frobenius distance).
    pub tolerance: T,

    /// Damping factor beta in [0, 1].
    pub damping: T,

    /// Behavior at the iteration cap.
    pub policy: ConvergencePolicy,
}

impl<T: Float> Default for FactorizationExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FactorizationExecutor<T> {
    /// Create an executor with the default parameters.
    pub fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: T::from(DEFAULT_TOLERANCE).unwrap(),
            damping: T::from(DEFAULT_DAMPING).unwrap(),
            policy: ConvergencePolicy::default(),
        }
    }

    /// Set the iteration cap.
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Set the convergence threshold.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the damping factor.
    pub fn damping(mut self, damping: T) -> Self {
        self.damping = damping;
        self
    }

    /// Set the behavior at the iteration cap.
    pub fn policy(mut self, policy: ConvergencePolicy) -> Self {
        self.policy = policy;
        self
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Run the optimization loop on affinity target `w` with starting point
    /// `initial`.
    ///
    /// Shapes are assumed validated: `w` is N x N and `initial` is N x k.
    pub fn optimize(
        &self,
        w: &Matrix<T>,
        initial: &Matrix<T>,
    ) -> Result<FactorizationOutput<T>, SymNmfError> {
        let rows = initial.rows();
        let cols = initial.cols();
        let beta = self.damping;
        let retain = T::one() - beta;

        let mut current = initial.clone();
        let mut residual = T::infinity();

        for iteration in 0..self.max_iterations {
            let transposed = transpose(&current);
            let gram = multiply(&current, &transposed); // N x N intermediate
            drop(transposed);
            let denominator = multiply(&gram, &current);
            drop(gram);
            let numerator = multiply(w, &current);

            let mut next = Matrix::zeros(rows, cols);
            for i in 0..rows {
                for j in 0..cols {
                    let den = denominator[(i, j)];
                    next[(i, j)] = if den == T::zero() {
                        current[(i, j)]
                    } else {
                        current[(i, j)] * (retain + beta * numerator[(i, j)] / den)
                    };
                }
            }

            residual = frobenius_distance_sq(&next, &current);
            if residual < self.tolerance {
                return Ok(FactorizationOutput {
                    factors: next,
                    iterations: iteration + 1,
                    converged: true,
                    residual,
                });
            }
            current = next;
        }

        match self.policy {
            ConvergencePolicy::Strict => Err(SymNmfError::DidNotConverge {
                iterations: self.max_iterations,
            }),
            ConvergencePolicy::BestEffort => Ok(FactorizationOutput {
                factors: current,
                iterations: self.max_iterations,
                converged: false,
                residual,
            }),
        }
    }
}
