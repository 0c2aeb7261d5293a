//! # SymNMF — Symmetric Non-negative Matrix Factorization for Rust
//!
//! Graph-based clustering by symmetric non-negative matrix factorization.
//! Given N points in d-dimensional space, the pipeline builds a pairwise
//! Gaussian similarity graph, normalizes it into a doubly-scaled affinity
//! matrix W, and iteratively factors W into a single non-negative N x k
//! matrix H such that `H * H^T ≈ W`. Rows of H are soft cluster memberships;
//! their per-row argmax gives hard labels.
//!
//! ## Pipeline
//!
//! Four stages form a strict producer chain:
//!
//! 1. **Similarity**: `A[i][j] = exp(-||p_i - p_j||^2 / 2)`, zero diagonal.
//! 2. **Degree**: diagonal matrix of per-point total affinity.
//! 3. **Normalization**: `W = D^-1/2 * A * D^-1/2`, with a zero-degree guard.
//! 4. **Factorization**: damped multiplicative updates on H until the squared
//!    Frobenius distance between successive iterates drops below tolerance.
//!
//! ## Quick Start
//!
//! ```rust
//! use symnmf::prelude::*;
//!
//! let points = vec![
//!     vec![0.0, 0.0],
//!     vec![0.2, 0.1],
//!     vec![8.0, 8.0],
//!     vec![8.1, 7.9],
//! ];
//!
//! // Build the model
//! let model = SymNmf::new()
//!     .clusters(2)        // Number of clusters (k)
//!     .seed(1234)         // Reproducible initialization
//!     .build()?;
//!
//! // Fit the model to the data
//! let result = model.fit(&points)?;
//!
//! assert_eq!(result.labels.len(), 4);
//! println!("{}", result);
//! # Result::<(), SymNmfError>::Ok(())
//! ```
//!
//! ## Matrix Goals
//!
//! The intermediate matrices are available directly:
//!
//! ```rust
//! use symnmf::prelude::*;
//!
//! let points = vec![vec![0.0], vec![2.0]];
//!
//! let a = similarity::<f64, _>(&points)?; // pairwise similarity
//! let d = degree::<f64, _>(&points)?;     // diagonal degree
//! let w = normalized::<f64, _>(&points)?; // normalized affinity
//!
//! assert_eq!(a[(0, 0)], 0.0);
//! assert!((a[(0, 1)] - (-2.0f64).exp()).abs() < 1e-12);
//! assert_eq!(d[(0, 0)], a[(0, 1)]);
//! assert_eq!(w.rows(), 2);
//! # Result::<(), SymNmfError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Every public operation returns `Result<_, SymNmfError>`: either a complete
//! result or a typed failure, never a partial one. Ragged point sets,
//! non-finite coordinates, bad parameters, and non-convergence all surface as
//! distinct variants; nothing is logged or swallowed internally.
//!
//! By default the optimization treats iteration-cap exhaustion as an error.
//! Use `ConvergencePolicy::BestEffort` to receive the last iterate flagged
//! with `converged = false` instead.
//!
//! ## References
//!
//! - Kuang, Ding & Park (2012). "Symmetric Nonnegative Matrix Factorization
//!   for Graph Clustering" (SDM)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - dense matrix storage and error types.
mod primitives;

// Layer 2: Math - distance and dense matrix primitives.
mod math;

// Layer 3: Affinity - similarity, degree, and normalization stages.
mod affinity;

// Layer 4: Evaluation - initialization, labels, and diagnostics.
mod evaluation;

// Layer 5: Engine - validation, optimization loop, and result types.
mod engine;

// Point-set ingestion trait and text parsing.
mod input;

// High-level fluent API for SymNMF clustering.
mod api;

// Standard SymNMF prelude.
pub mod prelude {
    pub use crate::api::{degree, normalized, similarity};
    pub use crate::api::{SymNmf, SymNmfError, SymNmfModel, SymNmfResult};
    pub use crate::engine::executor::ConvergencePolicy;
    pub use crate::evaluation::diagnostics::{silhouette_score, Diagnostics};
    pub use crate::evaluation::init::initial_factors;
    pub use crate::evaluation::labels::hard_labels;
    #[cfg(feature = "std")]
    pub use crate::input::parse_points;
    pub use crate::input::PointsInput;
    pub use crate::primitives::matrix::Matrix;
}

pub use crate::api::{degree, normalized, similarity};
pub use crate::api::{SymNmf, SymNmfError, SymNmfModel, SymNmfResult};
pub use crate::primitives::matrix::Matrix;

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod affinity {
        pub use crate::affinity::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
