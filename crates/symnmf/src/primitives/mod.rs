//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the basic data structures shared by every other layer:
//! - The owned dense matrix type
//! - The error enum surfaced by all fallible operations
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Affinity
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Owned, row-major dense matrix storage.
pub mod matrix;

/// Error types for SymNMF operations.
pub mod errors;
