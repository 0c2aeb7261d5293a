//! High-level API for SymNMF clustering.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: the three
//! matrix goals (`similarity`, `degree`, `normalized`) as free functions, and
//! a fluent builder for configuring and running the full factorization.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called; data
//!   is validated at the start of every operation.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SymNmf`] builder via `SymNmf::new()`.
//! 2. Chain configuration methods (`.clusters()`, `.tolerance()`, etc.).
//! 3. Call `.build()` to obtain a validated [`SymNmfModel`].
//! 4. Call `.fit()` (or `.fit_with_initial()`) on the model.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::affinity::{degree, normalize, similarity};
use crate::engine::executor::{
    ConvergencePolicy, FactorizationExecutor, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS,
    DEFAULT_TOLERANCE,
};
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::{silhouette_score, Diagnostics};
use crate::evaluation::init::{initial_factors, DEFAULT_SEED};
use crate::evaluation::labels::hard_labels;
use crate::input::PointsInput;

// Publicly re-exported types
pub use crate::engine::output::SymNmfResult;
pub use crate::primitives::errors::SymNmfError;
pub use crate::primitives::matrix::Matrix;

// ============================================================================
// Matrix Goals
// ============================================================================

/// Build the pairwise similarity matrix A for a point set.
pub fn similarity<T, P>(points: &P) -> Result<Matrix<T>, SymNmfError>
where
    T: Float,
    P: PointsInput<T> + ?Sized,
{
    let points = points.to_points()?;
    Validator::validate_points(&points)?;
    Ok(similarity::similarity_matrix(&points))
}

/// Build the diagonal degree matrix D for a point set.
pub fn degree<T, P>(points: &P) -> Result<Matrix<T>, SymNmfError>
where
    T: Float,
    P: PointsInput<T> + ?Sized,
{
    let points = points.to_points()?;
    Validator::validate_points(&points)?;
    Ok(degree::degree_matrix(&points))
}

/// Build the normalized affinity matrix W for a point set.
pub fn normalized<T, P>(points: &P) -> Result<Matrix<T>, SymNmfError>
where
    T: Float,
    P: PointsInput<T> + ?Sized,
{
    let points = points.to_points()?;
    Validator::validate_points(&points)?;
    Ok(normalize::normalized_matrix(&points))
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a SymNMF clustering run.
#[derive(Debug, Clone)]
pub struct SymNmf<T> {
    /// Number of clusters (columns of H). Required.
    pub clusters: Option<usize>,

    /// Iteration cap of the optimization loop.
    pub max_iterations: Option<usize>,

    /// Convergence threshold (squared Frobenius distance).
    pub tolerance: Option<T>,

    /// Damping factor of the multiplicative update, in [0, 1].
    pub damping: Option<T>,

    /// Seed for the random initial factor matrix.
    pub seed: Option<u64>,

    /// Behavior at the iteration cap.
    pub policy: Option<ConvergencePolicy>,

    /// Whether to compute silhouette diagnostics on the result.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SymNmf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SymNmf<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            clusters: None,
            max_iterations: None,
            tolerance: None,
            damping: None,
            seed: None,
            policy: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Set the number of clusters.
    pub fn clusters(mut self, clusters: usize) -> Self {
        if self.clusters.is_some() {
            self.duplicate_param = Some("clusters");
        }
        self.clusters = Some(clusters);
        self
    }

    /// Set the iteration cap.
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(iterations);
        self
    }

    /// Set the convergence threshold.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the damping factor.
    pub fn damping(mut self, damping: T) -> Self {
        if self.damping.is_some() {
            self.duplicate_param = Some("damping");
        }
        self.damping = Some(damping);
        self
    }

    /// Set the seed for the random initial factor matrix.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set the behavior at the iteration cap.
    pub fn convergence_policy(mut self, policy: ConvergencePolicy) -> Self {
        if self.policy.is_some() {
            self.duplicate_param = Some("convergence_policy");
        }
        self.policy = Some(policy);
        self
    }

    /// Include silhouette diagnostics in the result.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Validate the configuration and produce a model.
    pub fn build(self) -> Result<SymNmfModel<T>, SymNmfError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let clusters = self
            .clusters
            .ok_or_else(|| SymNmfError::InvalidInput("cluster count is required".into()))?;
        if clusters == 0 {
            return Err(SymNmfError::InvalidClusterCount {
                clusters,
                points: 0,
            });
        }

        let max_iterations = self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS);
        Validator::validate_iterations(max_iterations)?;

        let tolerance = self
            .tolerance
            .unwrap_or_else(|| T::from(DEFAULT_TOLERANCE).unwrap());
        Validator::validate_tolerance(tolerance)?;

        let damping = self
            .damping
            .unwrap_or_else(|| T::from(DEFAULT_DAMPING).unwrap());
        Validator::validate_damping(damping)?;

        Ok(SymNmfModel {
            clusters,
            max_iterations,
            tolerance,
            damping,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            policy: self.policy.unwrap_or_default(),
            return_diagnostics: self.return_diagnostics.unwrap_or(false),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated SymNMF configuration, ready to fit point sets.
#[derive(Debug, Clone)]
pub struct SymNmfModel<T> {
    /// Number of clusters (columns of H).
    pub clusters: usize,

    /// Iteration cap of the optimization loop.
    pub max_iterations: usize,

    /// Convergence threshold.
    pub tolerance: T,

    /// Damping factor.
    pub damping: T,

    /// Seed for the random initial factor matrix.
    pub seed: u64,

    /// Behavior at the iteration cap.
    pub policy: ConvergencePolicy,

    /// Whether to compute silhouette diagnostics.
    pub return_diagnostics: bool,
}

impl<T: Float> SymNmfModel<T> {
    /// Cluster a point set, generating the initial factor matrix internally.
    pub fn fit<P>(&self, points: &P) -> Result<SymNmfResult<T>, SymNmfError>
    where
        P: PointsInput<T> + ?Sized,
    {
        let points = points.to_points()?;
        Validator::validate_points(&points)?;
        Validator::validate_cluster_count(self.clusters, points.len())?;

        let target = normalize::normalized_matrix(&points);
        let initial = initial_factors(&target, self.clusters, self.seed);
        self.run(&points, &target, &initial)
    }

    /// Cluster a point set from a caller-supplied initial factor matrix.
    ///
    /// The matrix must be N x k, finite, and non-negative; only shape and
    /// finiteness are checked here.
    pub fn fit_with_initial<P>(
        &self,
        points: &P,
        initial: &Matrix<T>,
    ) -> Result<SymNmfResult<T>, SymNmfError>
    where
        P: PointsInput<T> + ?Sized,
    {
        let points = points.to_points()?;
        Validator::validate_points(&points)?;
        Validator::validate_cluster_count(self.clusters, points.len())?;
        Validator::validate_initial_factors(initial, points.len(), self.clusters)?;

        let target = normalize::normalized_matrix(&points);
        self.run(&points, &target, initial)
    }

    fn run(
        &self,
        points: &[Vec<T>],
        target: &Matrix<T>,
        initial: &Matrix<T>,
    ) -> Result<SymNmfResult<T>, SymNmfError> {
        let executor = FactorizationExecutor::new()
            .max_iterations(self.max_iterations)
            .tolerance(self.tolerance)
            .damping(self.damping)
            .policy(self.policy);
        let output = executor.optimize(target, initial)?;

        let labels = hard_labels(&output.factors);
        let diagnostics = if self.return_diagnostics {
            silhouette_score(points, &labels).map(|silhouette| Diagnostics { silhouette })
        } else {
            None
        };

        Ok(SymNmfResult {
            factors: output.factors,
            labels,
            clusters: self.clusters,
            converged: output.converged,
            iterations: output.iterations,
            residual: output.residual,
            diagnostics,
        })
    }
}
