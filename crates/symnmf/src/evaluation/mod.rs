//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer surrounds the optimization with the pieces a clustering run
//! needs before and after the numerical core:
//! - Seeded generation of the initial factor matrix
//! - Hard label extraction from the converged factors
//! - Silhouette diagnostics for fit quality
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Affinity
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Seeded initial factor matrix generation.
pub mod init;

/// Hard cluster assignment (per-row argmax).
pub mod labels;

/// Clustering quality metrics.
pub mod diagnostics;
